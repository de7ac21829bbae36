use web_sys::{HtmlInputElement, HtmlSelectElement};
use workout_tracker_lib::workout::{WorkoutForm, WorkoutKind};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub on_submit: Callback<WorkoutForm>,
    pub on_cancel: Callback<()>,
}

/// Modal asking for the workout details of the point picked on the map.
/// Remount it (new `key`) to clear the inputs.
#[function_component]
pub fn WorkoutFormModal(props: &Props) -> Html {
    let kind = use_state(|| WorkoutKind::Run);
    let distance = use_state(String::new);
    let duration = use_state(String::new);

    let on_kind_change = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(parsed) = select.value().parse() {
                kind.set(parsed);
            }
        })
    };

    let on_distance_input = {
        let distance = distance.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            distance.set(input.value());
        })
    };

    let on_duration_input = {
        let duration = duration.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            duration.set(input.value());
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let (kind, distance, duration) = (kind.clone(), distance.clone(), duration.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(WorkoutForm::new(*kind, (*distance).clone(), (*duration).clone()));
        })
    };

    let on_overlay_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! { <>
        <div class="overlay" onclick={on_overlay_click} />
        <div class="modal">
            <form class="form" onsubmit={on_submit}>
                <label class="form__label">{"Type"}</label>
                <select class="form__input form__input--type" onchange={on_kind_change}>
                    { for WorkoutKind::ALL.iter().map(|k| html! {
                        <option value={k.type_name()} selected={*k == *kind}>{k.display_name()}</option>
                    }) }
                </select>

                <label class="form__label">{"Distance"}</label>
                <input
                    class="form__input form__input--distance"
                    placeholder="km"
                    value={(*distance).clone()}
                    oninput={on_distance_input}
                />

                <label class="form__label">{"Duration"}</label>
                <input
                    class="form__input form__input--duration"
                    placeholder="min"
                    value={(*duration).clone()}
                    oninput={on_duration_input}
                />

                <button class="btn btn--save-workout" type="submit">{"Save"}</button>
            </form>
        </div>
    </> }
}
