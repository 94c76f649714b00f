use contracts::domain::matches::MatchDto;
use contracts::enums::CanonicalPlan;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::form::MatchForm;
use crate::dashboard::confirm_delete;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::date_utils::format_date;
use crate::shared::forms::{bind, field_error};
use crate::shared::icons::icon;
use crate::shared::validation::FieldErrors;

fn division_options() -> Vec<(String, String)> {
    CanonicalPlan::all()
        .into_iter()
        .map(|p| (p.code().to_string(), p.display_name().to_string()))
        .collect()
}

#[component]
pub fn MatchesPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<MatchDto>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editing = RwSignal::new(None::<MatchForm>);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_matches().await {
                Ok(mut data) => {
                    data.sort_by(|a, b| b.match_date.cmp(&a.match_date));
                    items.set(data);
                }
                Err(e) => {
                    log::error!("Failed to load matches: {}", e);
                    set_error.set(Some(format!("Could not load matches: {}", e.user_message())));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_data());

    let delete = move |m: MatchDto| {
        let label = format!("{} vs {}", m.home_team, m.away_team);
        if !confirm_delete(&label) {
            return;
        }
        spawn_local(async move {
            match api::delete_match(m.id).await {
                Ok(()) => {
                    log::info!("Match {} deleted", m.id);
                    items.update(|list| list.retain(|x| x.id != m.id));
                }
                Err(e) => set_error.set(Some(e.user_message())),
            }
        });
    };

    let on_saved = Callback::new(move |_: ()| {
        editing.set(None);
        load_data();
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Matches"</h1>
                </div>
                <div class="page__header-right">
                    <Button on_click=Callback::new(move |_| editing.set(Some(MatchForm::default())))>
                        {icon("plus")}
                        " New match"
                    </Button>
                    <Button variant="secondary" busy=loading on_click=Callback::new(move |_| load_data())>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                {move || editing.get().map(|form| view! {
                    <MatchEditor
                        initial=form
                        on_saved=on_saved
                        on_cancel=Callback::new(move |_: ()| editing.set(None))
                    />
                })}

                <table class="table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Fixture"</th>
                            <th>"Score"</th>
                            <th>"Venue"</th>
                            <th>"Division"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || items.get()
                            key=|m| (m.id, m.home_score, m.away_score, m.match_date.clone())
                            children=move |m: MatchDto| {
                                let for_edit = m.clone();
                                let for_delete = m.clone();
                                let division = m
                                    .division
                                    .as_deref()
                                    .and_then(CanonicalPlan::from_code)
                                    .map(|p| p.display_name().to_string())
                                    .unwrap_or_default();
                                view! {
                                    <tr>
                                        <td>
                                            {format_date(&m.match_date)}
                                            {m.match_time.clone().map(|t| format!(" {}", t))}
                                        </td>
                                        <td>{format!("{} vs {}", m.home_team, m.away_team)}</td>
                                        <td>{m.score_label()}</td>
                                        <td>{m.venue.clone()}</td>
                                        <td>{division}</td>
                                        <td class="table__actions">
                                            <Button variant="ghost"
                                                on_click=Callback::new(move |_| editing.set(Some(MatchForm::from_dto(&for_edit))))>
                                                {icon("edit")}
                                            </Button>
                                            <Button variant="danger"
                                                on_click=Callback::new(move |_| delete(for_delete.clone()))>
                                                {icon("trash")}
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn MatchEditor(
    initial: MatchForm,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = initial.is_edit();
    let form = RwSignal::new(initial);
    let errors = RwSignal::new(FieldErrors::new());
    let saving = RwSignal::new(false);
    let save_error = RwSignal::new(None::<String>);

    let error_for = move |field| field_error(errors, field);
    let (home_team, set_home_team) = bind(form, |f| f.home_team.clone(), |f, v| f.home_team = v);
    let (away_team, set_away_team) = bind(form, |f| f.away_team.clone(), |f, v| f.away_team = v);
    let (match_date, set_match_date) = bind(form, |f| f.match_date.clone(), |f, v| f.match_date = v);
    let (match_time, set_match_time) = bind(form, |f| f.match_time.clone(), |f, v| f.match_time = v);
    let (venue, set_venue) = bind(form, |f| f.venue.clone(), |f, v| f.venue = v);
    let (home_score, set_home_score) = bind(form, |f| f.home_score.clone(), |f, v| f.home_score = v);
    let (away_score, set_away_score) = bind(form, |f| f.away_score.clone(), |f, v| f.away_score = v);
    let (division, set_division) = bind(form, |f| f.division.clone(), |f, v| f.division = v);

    let save = move |_| {
        let current = form.get_untracked();
        let input = match current.validate() {
            Ok(input) => input,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        save_error.set(None);
        saving.set(true);
        spawn_local(async move {
            let result = match current.id {
                Some(id) => api::update_match(id, &input).await,
                None => api::create_match(&input).await,
            };
            saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("Match {} saved", saved.id);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to save match: {}", e);
                    save_error.set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <div class="card editor">
            <h2 class="card__title">{if is_edit { "Edit match" } else { "New match" }}</h2>
            {move || save_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form__row">
                <Input label="Home team" required=true
                    value=home_team on_input=set_home_team
                    error=error_for("home_team") />
                <Input label="Away team" required=true
                    value=away_team on_input=set_away_team
                    error=error_for("away_team") />
            </div>
            <div class="form__row">
                <Input label="Date" input_type="date" required=true
                    value=match_date on_input=set_match_date
                    error=error_for("match_date") />
                <Input label="Kick-off" input_type="time"
                    value=match_time on_input=set_match_time
                    error=error_for("match_time") />
                <Input label="Venue" required=true
                    value=venue on_input=set_venue
                    error=error_for("venue") />
            </div>
            <div class="form__row">
                <Input label="Home score" input_type="number"
                    value=home_score on_input=set_home_score
                    error=error_for("home_score") />
                <Input label="Away score" input_type="number"
                    value=away_score on_input=set_away_score
                    error=error_for("away_score") />
                <Select label="Division"
                    value=division on_change=set_division
                    options=division_options() placeholder="Any division" />
            </div>
            <div class="editor__actions">
                <Button busy=saving on_click=Callback::new(save)>"Save"</Button>
                <Button variant="ghost" on_click=Callback::new(move |_| on_cancel.run(()))>"Cancel"</Button>
            </div>
        </div>
    }
}
