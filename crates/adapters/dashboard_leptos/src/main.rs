fn main() {
    leptos::mount::mount_to_body(chargehub_dashboard::App);
}
