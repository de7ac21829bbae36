/// Map presentation settings shared by the controller and the leaflet provider.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Zoom used both for the initial view and when navigating to a workout.
    pub zoom_level: f64,
    /// Corner for the zoom buttons, as leaflet names it.
    pub zoom_control_position: String,
    /// Seconds a pan to a workout takes.
    pub pan_duration: f64,
    pub tile_url: String,
    pub attribution: String,
    pub popup_max_width: f64,
    pub popup_min_width: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom_level: 13.,
            zoom_control_position: "topright".into(),
            pan_duration: 1.,
            tile_url: "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png".into(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".into(),
            popup_max_width: 250.,
            popup_min_width: 100.,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_map_layout() {
        let config = MapConfig::default();
        assert_eq!(config.zoom_level, 13.);
        assert_eq!(config.zoom_control_position, "topright");
        assert_eq!(config.pan_duration, 1.);
        assert!(config.popup_min_width < config.popup_max_width);
    }
}
