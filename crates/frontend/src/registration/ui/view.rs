use leptos::prelude::*;

use super::steps::*;
use super::view_model::RegistrationViewModel;
use crate::layout::global_context::use_global_context;
use crate::registration::steps::Step;
use crate::registration::WizardPhase;
use crate::routes::page::Page;

#[component]
fn StepIndicator(vm: RegistrationViewModel) -> impl IntoView {
    view! {
        <ol class="wizard__progress">
            {Step::all().into_iter().map(|step| {
                let state = move || {
                    let current = vm.current_step().number();
                    if step.number() < current {
                        "wizard__progress-item wizard__progress-item--done"
                    } else if step.number() == current {
                        "wizard__progress-item wizard__progress-item--current"
                    } else {
                        "wizard__progress-item"
                    }
                };
                view! {
                    <li class=state>
                        <span class="wizard__progress-number">{step.number()}</span>
                        <span class="wizard__progress-title">{step.title()}</span>
                    </li>
                }
            }).collect_view()}
        </ol>
    }
}

#[component]
pub fn RegistrationPage() -> impl IntoView {
    let ctx = use_global_context();
    let vm = RegistrationViewModel::new();

    let on_submitted = Callback::new(move |registrant_id: i64| {
        log::info!("Registrant {} created, continuing to payment", registrant_id);
        ctx.navigate(Page::Payment);
    });

    // A rejected step still notifies the wizard; remount only on step change
    let current_step = Memo::new(move |_| vm.current_step());
    let current_form = move || match current_step.get() {
        Step::Identity => view! { <IdentityStep vm=vm on_submitted=on_submitted /> }.into_any(),
        Step::Contact => view! { <ContactStep vm=vm on_submitted=on_submitted /> }.into_any(),
        Step::Physical => view! { <PhysicalStep vm=vm on_submitted=on_submitted /> }.into_any(),
        Step::Background => view! { <BackgroundStep vm=vm on_submitted=on_submitted /> }.into_any(),
        Step::Availability => {
            view! { <AvailabilityStep vm=vm on_submitted=on_submitted /> }.into_any()
        }
        Step::AdditionalInfo => {
            view! { <AdditionalInfoStep vm=vm on_submitted=on_submitted /> }.into_any()
        }
        Step::Acknowledgment => {
            view! { <AcknowledgmentStep vm=vm on_submitted=on_submitted /> }.into_any()
        }
    };

    view! {
        <section class="page wizard">
            <header class="wizard__header">
                <h1>"Player registration"</h1>
                <p class="wizard__plan">
                    {move || vm.plan().display_name()}
                    <button class="link-button" on:click=move |_| ctx.navigate(Page::Programs)>
                        "Change program"
                    </button>
                </p>
            </header>

            <StepIndicator vm=vm />

            {move || vm.message.get().map(|m| view! { <div class="alert alert--error">{m}</div> })}

            <Show
                when=move || !matches!(vm.phase(), WizardPhase::Submitted { .. })
                fallback=|| view! {
                    <div class="alert alert--success">
                        "Registration received. Taking you to payment..."
                    </div>
                }
            >
                <div class="wizard__body">
                    <h2 class="wizard__step-title">
                        {move || {
                            let step = vm.current_step();
                            format!("Step {} of {}: {}", step.number(), Step::COUNT, step.title())
                        }}
                    </h2>
                    {current_form}
                    <button class="link-button wizard__reset" on:click=move |_| vm.reset_command()>
                        "Start over"
                    </button>
                </div>
            </Show>
        </section>
    }
}
