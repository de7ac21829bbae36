use crate::components::{
    map_component::{create_container, LeafletMap, MapComponent},
    panel::Panel,
    workout_form::WorkoutFormModal,
};
use gloo_console::{error, info};
use gloo_utils::window;
use layout::Sidebar;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use workout_tracker_lib::{
    config::MapConfig,
    controller::{Controller, FormState},
    map::Coords,
    workout::{WorkoutForm, WorkoutId},
    Error,
};
use yew::prelude::*;

mod components;
mod geolocation;
mod layout;

enum MainMsg {
    PositionFound(Coords),
    PositionFailed(String),
    MapClicked(Coords),
    SubmitWorkout(WorkoutForm),
    CancelForm,
    SelectWorkout(WorkoutId),
    DeleteWorkout(WorkoutId),
    DeleteAll,
    ToggleSidebar,
    CloseSidebar,
}

struct Model {
    controller: Controller<LeafletMap>,
    container: HtmlElement,
    // Built up front, handed to the controller once the position is known
    pending_map: Option<LeafletMap>,
    // Bumped after each save so the form remounts with empty inputs
    form_generation: u32,
    sidebar: Sidebar,
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let config = MapConfig::default();

        let container = create_container().expect("failed to create map container");
        let pending_map = LeafletMap::new(&container, config.clone(), link.callback(MainMsg::MapClicked));

        let found = link.callback(MainMsg::PositionFound);
        let failed = link.callback(MainMsg::PositionFailed);
        spawn_local(async move {
            match geolocation::current_position().await {
                Ok(coords) => found.emit(coords),
                Err(reason) => failed.emit(reason),
            }
        });

        Self {
            controller: Controller::new(config),
            container,
            pending_map: Some(pending_map),
            form_generation: 0,
            sidebar: Sidebar::new(layout::is_narrow()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::PositionFound(coords) => {
                info!(format!("Position: {}, {}", coords.lat, coords.lng));
                if let Some(map) = self.pending_map.take() {
                    self.controller.attach_map(map, coords);
                }
            }
            MainMsg::PositionFailed(reason) => {
                let err = self.controller.geolocation_failed(reason);
                error!(err.to_string());
                alert("Could not get current position :(");
            }
            MainMsg::MapClicked(coords) => {
                if let Err(err) = self.controller.select_point(coords) {
                    error!(err.to_string());
                }
            }
            MainMsg::SubmitWorkout(form) => match self.controller.submit(&form) {
                Ok(id) => {
                    info!(format!("Saved workout {id}"));
                    self.form_generation += 1;
                }
                Err(err @ Error::Validation { .. }) => {
                    info!(err.to_string());
                    alert("Invalid inputs!");
                }
                Err(err) => error!(err.to_string()),
            },
            MainMsg::CancelForm => self.controller.cancel(),
            MainMsg::SelectWorkout(id) => {
                if let Err(err) = self.controller.navigate_to(id) {
                    info!(err.to_string());
                }
            }
            MainMsg::DeleteWorkout(id) => {
                self.controller.delete(id);
            }
            MainMsg::DeleteAll => {
                self.controller.delete_all();
            }
            MainMsg::ToggleSidebar => self.sidebar.toggle(),
            MainMsg::CloseSidebar => self.sidebar.close(),
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // The map container changes size when the sidebar collapses
        if let Some(map) = self.controller.map() {
            map.invalidate_size();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let form_open = matches!(self.controller.state(), FormState::AwaitingFormInput { .. });

        html! { <>
            if self.sidebar.is_open() {
                <Panel
                    entries={self.controller.list().entries().to_vec()}
                    select_workout={link.callback(MainMsg::SelectWorkout)}
                    delete_workout={link.callback(MainMsg::DeleteWorkout)}
                    delete_all={link.callback(|()| MainMsg::DeleteAll)}
                />
            }
            if self.sidebar.shows_overlay() && !form_open {
                <div class="overlay overlay--sidebar" onclick={link.callback(|_: MouseEvent| MainMsg::CloseSidebar)} />
            }
            <SidebarToggle open={self.sidebar.is_open()} on_click={link.callback(|()| MainMsg::ToggleSidebar)} />
            <div class="map">
                <MapComponent container={self.container.clone()} />
            </div>
            if form_open {
                <WorkoutFormModal
                    key={self.form_generation.to_string()}
                    on_submit={link.callback(MainMsg::SubmitWorkout)}
                    on_cancel={link.callback(|()| MainMsg::CancelForm)}
                />
            }
        </> }
    }
}

fn alert(message: &str) {
    if window().alert_with_message(message).is_err() {
        error!("Failed to show alert");
    }
}

#[derive(PartialEq, Properties, Clone)]
struct SidebarToggleProps {
    open: bool,
    on_click: Callback<()>,
}

/// Shows or hides the workout list. The arrow points the way the sidebar
/// will move: sideways in the wide layout, vertically when stacked.
#[function_component]
fn SidebarToggle(props: &SidebarToggleProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_| on_click.emit(()))
    };

    let (label, wide_arrow, narrow_arrow) = if props.open {
        ("Hide workouts", "◀", "▲")
    } else {
        ("Show workouts", "▶", "▼")
    };

    html! { <>
        <button onclick={onclick.clone()} class="btn sidebar-toggle sidebar-toggle--wide" aria-label={label}>
            {wide_arrow}
        </button>
        <button {onclick} class="btn sidebar-toggle sidebar-toggle--narrow" aria-label={label}>
            {narrow_arrow}
        </button>
    </> }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
