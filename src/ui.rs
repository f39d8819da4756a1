use gloo_net::http::Request;
use leptos::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{AppConfig, Theme};
use crate::formula::{FormulaSegment, MAX_COUNT};
use crate::periodic_table::{MAIN_COLUMNS, PlacedElement, SERIES_COLUMNS, TableLayout};
use crate::reference::ElementTable;
use crate::strings::{Locale, UiStrings};
use crate::{Compound, Element, FormulaGame, GameStatus, ReferenceData};

const CONFIG_URL: &str = "config.json";

fn set_body_theme(theme: Theme) {
    if let Some(document) = leptos::window().document() {
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
    }
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|error| format!("{}: {}", url, error))?;

    if !response.ok() {
        return Err(format!("{} returned HTTP {}", url, response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|error| format!("{}: {}", url, error))
}

async fn load_config() -> AppConfig {
    match fetch_json::<AppConfig>(CONFIG_URL).await {
        Ok(config) => config,
        Err(message) => {
            log::warn!("using default config ({})", message);
            AppConfig::default()
        }
    }
}

async fn load_startup() -> Result<(AppConfig, ReferenceData), String> {
    let config = load_config().await;
    log::set_max_level(config.level_filter());

    let table = fetch_json::<ElementTable>(&config.elements_url).await?;
    let compounds = fetch_json::<Vec<Compound>>(&config.compounds_url).await?;
    let data = ReferenceData::new(table.elements, compounds).map_err(|error| error.to_string())?;

    Ok((config, data))
}

#[component]
fn NumberSelector(heading: Signal<&'static str>, on_select: Callback<u8>) -> impl IntoView {
    view! {
        <div class="number-selector">
            <h2 class="section-heading">{heading}</h2>
            <div class="number-grid">
                {(1..=MAX_COUNT)
                    .map(|count| {
                        view! {
                            <button class="number-cell" on:click=move |_| on_select.call(count)>
                                {count.to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn FormulaDisplay(segments: Vec<FormulaSegment>, placeholder: &'static str) -> impl IntoView {
    if segments.is_empty() {
        return view! { <div class="formula placeholder">{placeholder}</div> }.into_view();
    }

    view! {
        <div class="formula">
            {segments
                .into_iter()
                .map(|segment| match segment {
                    FormulaSegment::Symbol(symbol) => view! { <span>{symbol}</span> }.into_view(),
                    FormulaSegment::Subscript(count) => {
                        view! { <sub>{count.to_string()}</sub> }.into_view()
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

#[component]
fn ElementCell(placed: PlacedElement, on_select: Callback<Element>) -> impl IntoView {
    let style = format!("grid-column: {}; grid-row: {}", placed.column, placed.row);
    let class = format!("element-cell {}", placed.element.color_class());
    let element = placed.element;
    let title = element.category.label();
    let number = element.atomic_number.to_string();
    let symbol = element.symbol.clone();
    let name = element.name.clone();

    view! {
        <div class=class style=style title=title on:click=move |_| on_select.call(element.clone())>
            <div class="element-number">{number}</div>
            <div class="element-symbol">{symbol}</div>
            <div class="element-name">{name}</div>
        </div>
    }
}

#[component]
fn ElementGrid(
    cells: Vec<PlacedElement>,
    columns: u32,
    on_select: Callback<Element>,
) -> impl IntoView {
    let style = format!("grid-template-columns: repeat({}, minmax(0, 1fr))", columns);

    view! {
        <div class="element-grid" style=style>
            {cells
                .into_iter()
                .map(|placed| view! { <ElementCell placed=placed on_select=on_select /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn PeriodicTable(layout: TableLayout, on_select: Callback<Element>) -> impl IntoView {
    view! {
        <section class="periodic-table">
            <ElementGrid cells=layout.main columns=MAIN_COLUMNS on_select=on_select />
            <div class="series series-lanthanides">
                <ElementGrid cells=layout.lanthanides columns=SERIES_COLUMNS on_select=on_select />
            </div>
            <div class="series series-actinides">
                <ElementGrid cells=layout.actinides columns=SERIES_COLUMNS on_select=on_select />
            </div>
        </section>
    }
}

#[component]
fn Game(config: AppConfig, data: ReferenceData) -> impl IntoView {
    let mut rng = StdRng::from_entropy();
    let game = match FormulaGame::new(&mut rng, data.list_compounds().to_vec()) {
        Ok(game) => game,
        Err(error) => {
            log::error!("cannot start game: {}", error);
            return view! {
                <section class="error-card">
                    <p class="eyebrow">"Startup error"</p>
                    <p class="error-body">{error.to_string()}</p>
                </section>
            }
            .into_view();
        }
    };

    let rng = store_value(rng);
    let game = create_rw_signal(game);
    let (locale, set_locale) = create_signal(config.locale);
    let (theme, set_theme) = create_signal(config.theme);

    create_effect(move |_| set_body_theme(theme.get()));

    let strings = move || UiStrings::for_locale(locale.get());

    let on_element = Callback::new(move |element: Element| {
        game.update(|game| {
            let _ = game.select_element(&element);
        })
    });

    let on_number = Callback::new(move |count: u8| {
        game.update(|game| {
            let _ = game.select_number(count);
        })
    });

    let backspace = move |_| {
        game.update(|game| {
            game.backspace();
        })
    };
    let clear = move |_| game.update(|game| game.clear());
    let check = move |_: ev::MouseEvent| {
        game.update(|game| {
            game.check_answer();
        })
    };
    let next = move |_: ev::MouseEvent| {
        rng.update_value(|rng| game.update(|game| game.start_new_challenge(rng)))
    };

    let toggle_locale = move |_| set_locale.update(|locale| *locale = locale.toggled());
    let toggle_theme = move |_| set_theme.update(|theme| *theme = theme.toggled());

    let status = move || game.with(|game| game.status());
    let status_class = move || match status() {
        GameStatus::Correct => "status-message correct",
        GameStatus::Incorrect => "status-message incorrect",
        GameStatus::Playing => "status-message",
    };

    view! {
        <main class="page">
            <header class="page-header">
                <h1 class="score">
                    {move || format!("{}: {}", strings().score, game.with(|game| game.score()))}
                </h1>
                <div class="header-actions">
                    <button class="pill" on:click=toggle_locale>{move || strings().switch_locale}</button>
                    <button class="pill" on:click=toggle_theme>
                        {move || match theme.get() {
                            Theme::Dark => "☀",
                            Theme::Light => "☾",
                        }}
                    </button>
                </div>
            </header>

            <div class="board">
                <section class="builder-card">
                    <div class="challenge">
                        <h2 class="title">{move || strings().title}</h2>
                        <p class="target-name">
                            {move || game.with(|game| game.current_compound().name.clone())}
                        </p>
                    </div>

                    <div class="formula-row">
                        {move || {
                            view! {
                                <FormulaDisplay
                                    segments=game.with(|game| game.formula_segments())
                                    placeholder=strings().formula_placeholder
                                />
                            }
                        }}
                        <div class="edit-actions">
                            <button class="backspace" on:click=backspace>{move || strings().backspace}</button>
                            <button class="clear" on:click=clear>{move || strings().clear}</button>
                        </div>
                    </div>

                    <div class="answer-actions">
                        {move || {
                            if game.with(|game| game.can_check()) {
                                view! { <button class="check" on:click=check>{strings().check}</button> }
                            } else {
                                view! { <button class="next" on:click=next>{strings().next_challenge}</button> }
                            }
                        }}
                        {move || {
                            strings()
                                .status_message(status())
                                .map(|message| view! { <p class=status_class>{message}</p> })
                        }}
                    </div>
                </section>

                <NumberSelector
                    heading=Signal::derive(move || strings().numbers_heading)
                    on_select=on_number
                />
            </div>

            <PeriodicTable layout=data.table_layout() on_select=on_element />
        </main>
    }
    .into_view()
}

#[component]
fn App() -> impl IntoView {
    let startup = create_local_resource(|| (), |_| async { load_startup().await });
    let fallback = UiStrings::for_locale(Locale::default());

    view! {
        <div class="app">
        {move || match startup.get() {
            None => view! {
                <section class="placeholder-card">
                    <p class="lede">{fallback.title}</p>
                </section>
            }
            .into_view(),
            Some(Err(message)) => {
                log::error!("startup failed: {}", message);
                view! {
                    <section class="error-card">
                        <p class="eyebrow">"Startup error"</p>
                        <p class="error-body">{message}</p>
                    </section>
                }
                .into_view()
            }
            Some(Ok((config, data))) => view! { <Game config=config data=data /> }.into_view(),
        }}
        </div>
    }
}

pub fn mount() {
    mount_to_body(|| view! { <App /> });
}
