pub mod app_script;
pub mod extension_point;
pub mod shop_script;
