mod alert_banner;
mod charge_table;
mod etat_badge;
mod loading;

pub use charge_table::ChargeTable;
pub use loading::Loading;
