use gloo_utils::document;
use leaflet::{
    LatLng, Map, MapOptions, Marker, MouseEvent, Popup, PopupOptions, TileLayer, TileLayerOptions, Zoom,
    ZoomOptions, ZoomPanOptions,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, Node};
use workout_tracker_lib::{
    config::MapConfig,
    map::{Coords, MapProvider, MarkerPopup},
};
use yew::prelude::*;

/// Leaflet-backed map provider.
pub struct LeafletMap {
    map: Map,
    config: MapConfig,
}

impl LeafletMap {
    pub fn new(container: &HtmlElement, config: MapConfig, on_click: Callback<Coords>) -> Self {
        let map_opts = MapOptions::default();
        // Replaced below by a control in the configured corner
        map_opts.set_zoom_control(false);
        let map = Map::new_with_element(container, &map_opts);

        let mut zoom_opts = ZoomOptions::default();
        zoom_opts.set_position(&config.zoom_control_position.clone());
        Zoom::new(&zoom_opts).add_to(&map);

        add_tile_layer(&map, &config);

        map.on_mouse_click(Box::new(move |e: MouseEvent| {
            let lat_lng = e.lat_lng();
            on_click.emit(Coords::new(lat_lng.lat(), lat_lng.lng()));
        }));

        Self { map, config }
    }

    pub fn invalidate_size(&self) {
        self.map.invalidate_size(false);
    }
}

impl MapProvider for LeafletMap {
    type Marker = Marker;

    fn place(&mut self, location: Coords, popup: &MarkerPopup) -> Marker {
        let opts = PopupOptions::default();
        opts.set_max_width(self.config.popup_max_width);
        opts.set_min_width(self.config.popup_min_width);
        opts.set_auto_close(false);
        opts.set_close_on_click(false);
        opts.set_class_name(popup.class_name.clone());

        let leaflet_popup = Popup::new(&opts, None);
        leaflet_popup.set_content(&JsValue::from_str(&popup.content));

        let marker = Marker::new(&LatLng::new(location.lat, location.lng));
        marker.add_to(&self.map);
        marker.bind_popup(&leaflet_popup);
        marker.open_popup();
        marker
    }

    fn remove_marker(&mut self, marker: Marker) {
        marker.remove();
    }

    fn set_view(&mut self, location: Coords, zoom: f64) {
        let opts = ZoomPanOptions::default();
        opts.set_animate(true);
        opts.set_duration(self.config.pan_duration);
        self.map.set_view_with_options(&LatLng::new(location.lat, location.lng), zoom, &opts);
    }
}

fn add_tile_layer(map: &Map, config: &MapConfig) {
    let opts = TileLayerOptions::new();
    opts.set_attribution(config.attribution.clone());
    opts.set_update_when_idle(true);
    TileLayer::new_options(&config.tile_url, &opts).add_to(map);
}

/// Detached element leaflet renders into. It lives as long as the app so the
/// map survives re-renders.
pub fn create_container() -> Result<HtmlElement, JsValue> {
    let container: HtmlElement = document().create_element("div")?.dyn_into()?;
    container.set_class_name("map__canvas");
    container.set_id("map");
    Ok(container)
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub container: HtmlElement,
}

#[function_component]
pub fn MapComponent(props: &Props) -> Html {
    let node: Node = props.container.clone().into();
    Html::VRef(node)
}
