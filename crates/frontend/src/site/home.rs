use contracts::domain::gallery::GalleryItem;
use contracts::domain::matches::MatchDto;
use contracts::domain::player_month::PlayerOfMonth;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::layout::global_context::use_global_context;
use crate::routes::page::Page;
use crate::shared::date_utils::{format_date, format_month, is_upcoming};

const GALLERY_STRIP_LEN: usize = 6;
const MATCHES_SHOWN: usize = 3;

/// Upcoming fixtures first (soonest first), then recent results (latest first)
pub fn split_matches(
    mut matches: Vec<MatchDto>,
    today: chrono::NaiveDate,
) -> (Vec<MatchDto>, Vec<MatchDto>) {
    matches.sort_by(|a, b| a.match_date.cmp(&b.match_date));
    let (upcoming, mut played): (Vec<_>, Vec<_>) = matches
        .into_iter()
        .partition(|m| !m.is_played() && is_upcoming(&m.match_date, today));
    played.retain(MatchDto::is_played);
    played.reverse();
    (upcoming, played)
}

/// Entry for the most recent month
pub fn latest_player(mut players: Vec<PlayerOfMonth>) -> Option<PlayerOfMonth> {
    players.sort_by(|a, b| b.month.cmp(&a.month));
    players.into_iter().next()
}

#[component]
fn MatchRow(m: MatchDto) -> impl IntoView {
    view! {
        <li class="match-row">
            <span class="match-row__date">{format_date(&m.match_date)}</span>
            <span class="match-row__teams">
                {m.home_team.clone()} " " <strong>{m.score_label()}</strong> " " {m.away_team.clone()}
            </span>
            <span class="match-row__venue">{m.venue.clone()}</span>
        </li>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_global_context();
    let upcoming = RwSignal::new(Vec::<MatchDto>::new());
    let results = RwSignal::new(Vec::<MatchDto>::new());
    let gallery = RwSignal::new(Vec::<GalleryItem>::new());
    let player = RwSignal::new(None::<PlayerOfMonth>);

    spawn_local(async move {
        match api::fetch_matches().await {
            Ok(all) => {
                let (next, played) = split_matches(all, chrono::Utc::now().date_naive());
                upcoming.set(next.into_iter().take(MATCHES_SHOWN).collect());
                results.set(played.into_iter().take(MATCHES_SHOWN).collect());
            }
            Err(e) => log::warn!("Matches unavailable: {}", e),
        }
    });
    spawn_local(async move {
        match api::fetch_gallery().await {
            Ok(items) => gallery.set(items.into_iter().take(GALLERY_STRIP_LEN).collect()),
            Err(e) => log::warn!("Gallery unavailable: {}", e),
        }
    });
    spawn_local(async move {
        match api::fetch_player_month().await {
            Ok(players) => player.set(latest_player(players)),
            Err(e) => log::warn!("Player of the month unavailable: {}", e),
        }
    });

    view! {
        <section class="hero">
            <h1>"Develop the player. Grow the person."</h1>
            <p>"Professional coaching for boys and girls aged 5 to 18."</p>
            <div class="hero__actions">
                <button class="button button--primary" on:click=move |_| ctx.navigate(Page::Programs)>
                    "See programs"
                </button>
                <button class="button button--secondary" on:click=move |_| ctx.navigate(Page::Contact)>
                    "Contact us"
                </button>
            </div>
        </section>

        <section class="highlights">
            <div class="highlight"><h3>"Licensed coaches"</h3><p>"Every session is led by certified staff."</p></div>
            <div class="highlight"><h3>"Small groups"</h3><p>"At most 12 players per coach."</p></div>
            <div class="highlight"><h3>"Real matches"</h3><p>"League and tournament play every season."</p></div>
        </section>

        <section class="home__matches">
            <div>
                <h2>"Upcoming matches"</h2>
                <Show when=move || !upcoming.with(Vec::is_empty) fallback=|| view! { <p>"No fixtures scheduled."</p> }>
                    <ul>
                        <For each=move || upcoming.get() key=|m| m.id children=|m| view! { <MatchRow m=m /> } />
                    </ul>
                </Show>
            </div>
            <div>
                <h2>"Latest results"</h2>
                <Show when=move || !results.with(Vec::is_empty) fallback=|| view! { <p>"No results yet."</p> }>
                    <ul>
                        <For each=move || results.get() key=|m| m.id children=|m| view! { <MatchRow m=m /> } />
                    </ul>
                </Show>
            </div>
        </section>

        {move || player.get().map(|p| view! {
            <section class="player-month">
                <img src=p.image_url.clone() alt=p.name.clone() />
                <div>
                    <h2>"Player of the month"</h2>
                    <h3>{p.name.clone()}</h3>
                    <p class="player-month__month">{format_month(&p.month)}</p>
                    {p.description.clone().map(|d| view! { <p>{d}</p> })}
                </div>
            </section>
        })}

        <section class="gallery-strip">
            <For
                each=move || gallery.get()
                key=|item| item.id
                children=|item| view! {
                    <figure>
                        <img src=item.image_url.clone() alt=item.title.clone() loading="lazy" />
                        <figcaption>{item.title}</figcaption>
                    </figure>
                }
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixture(id: i64, date: &str, score: Option<(u32, u32)>) -> MatchDto {
        MatchDto {
            id,
            home_team: "Academy".to_string(),
            away_team: "Rivals".to_string(),
            match_date: date.to_string(),
            match_time: None,
            venue: "Field 1".to_string(),
            home_score: score.map(|s| s.0),
            away_score: score.map(|s| s.1),
            division: None,
        }
    }

    #[test]
    fn test_split_matches() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let (upcoming, played) = split_matches(
            vec![
                fixture(1, "2026-11-02", None),
                fixture(2, "2026-10-04", Some((2, 1))),
                fixture(3, "2026-10-25", None),
                fixture(4, "2026-10-11", Some((0, 0))),
                fixture(5, "2026-10-01", None),
            ],
            today,
        );
        assert_eq!(upcoming.iter().map(|m| m.id).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(played.iter().map(|m| m.id).collect::<Vec<_>>(), vec![4, 2]);
    }

    #[test]
    fn test_latest_player() {
        let player = |id, month: &str| PlayerOfMonth {
            id,
            name: format!("P{}", id),
            month: month.to_string(),
            description: None,
            image_url: String::new(),
        };
        assert_eq!(
            latest_player(vec![player(1, "2026-08"), player(2, "2026-10"), player(3, "2026-09")])
                .map(|p| p.id),
            Some(2)
        );
        assert_eq!(latest_player(vec![]), None);
    }
}
