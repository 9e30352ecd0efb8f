use log::Level;

pub const CONTACT_EMAIL: &str = "contact@mvpvisuals.com";
const ASSET_BASE: &str = "/assets";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Measurement and interaction logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn asset_url(path: &str) -> String {
    format!("{}/{}", ASSET_BASE, path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_join_cleanly() {
        assert_eq!(asset_url("logos/figma.svg"), "/assets/logos/figma.svg");
        assert_eq!(asset_url("/focus.png"), "/assets/focus.png");
    }
}
