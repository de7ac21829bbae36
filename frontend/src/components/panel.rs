use workout_tracker_lib::{list_view::ListEntry, workout::WorkoutId};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub entries: Vec<ListEntry>,
    pub select_workout: Callback<WorkoutId>,
    pub delete_workout: Callback<WorkoutId>,
    pub delete_all: Callback<()>,
}

/// Sidebar listing the workouts, newest first.
#[function_component]
pub fn Panel(props: &Props) -> Html {
    let on_delete_all = {
        let delete_all = props.delete_all.clone();
        Callback::from(move |_| delete_all.emit(()))
    };

    html! {
        <div class="sidebar">
            <ul class="workouts">
                { for props.entries.iter().map(|entry| html! {
                    <WorkoutEntry
                        key={entry.id.to_string()}
                        entry={entry.clone()}
                        select_workout={props.select_workout.clone()}
                        delete_workout={props.delete_workout.clone()}
                    />
                }) }
            </ul>
            if !props.entries.is_empty() {
                <button class="btn btn--reset" onclick={on_delete_all}>{"Delete all workouts"}</button>
            }
        </div>
    }
}

#[derive(PartialEq, Properties, Clone)]
struct EntryProps {
    entry: ListEntry,
    select_workout: Callback<WorkoutId>,
    delete_workout: Callback<WorkoutId>,
}

#[function_component]
fn WorkoutEntry(props: &EntryProps) -> Html {
    let entry = &props.entry;
    let id = entry.id;

    let on_select = {
        let select_workout = props.select_workout.clone();
        Callback::from(move |_| select_workout.emit(id))
    };

    let on_delete = {
        let delete_workout = props.delete_workout.clone();
        Callback::from(move |e: MouseEvent| {
            // Don't also navigate to the workout being removed
            e.stop_propagation();
            delete_workout.emit(id);
        })
    };

    html! {
        <li class={classes!("workout", format!("workout--{}", entry.kind.type_name()))} data-id={id.to_string()} onclick={on_select}>
            <div class="workout__header">
                <div class="workout__title" aria-label={entry.kind.type_name()}>{entry.label.clone()}</div>
                <button class="btn btn--delete-workout" aria-label="Delete workout" onclick={on_delete}>{"✕"}</button>
            </div>
            <div class="workout__row">
                <div class="workout__details">
                    <span class="workout__value">{entry.duration_min.to_string()}</span>
                    <span class="workout__unit">{" min"}</span>
                </div>
                <div class="workout__details">
                    <span class="workout__value">{entry.distance_km.to_string()}</span>
                    <span class="workout__unit">{" km"}</span>
                </div>
            </div>
        </li>
    }
}
