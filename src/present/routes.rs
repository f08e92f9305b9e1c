// src/present/routes.rs

use serde::{Deserialize, Serialize};
use warp::{Filter, Rejection, Reply};

use super::display::{country_message, final_message};
use super::page::INDEX_HTML;
use super::AppState;

#[derive(Debug, Deserialize)]
pub struct CountryQuery {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    year: Option<String>,
}

#[derive(Debug, Serialize)]
struct Message {
    message: String,
}

#[derive(Debug, Serialize)]
struct Options<'a> {
    countries: Vec<&'a str>,
    years: &'a [i32],
}

fn with_state(state: AppState) -> impl Filter<Extract = (AppState,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || state.clone())
}

fn country_reply(q: CountryQuery, state: AppState) -> impl Reply {
    let name = q.name.unwrap_or_default();
    let count = state.query.title_count_for(Some(&name));
    warp::reply::json(&Message {
        message: country_message(&count, &name),
    })
}

/// Unparseable years count as "no selection", same as an empty one.
fn year_reply(q: YearQuery, state: AppState) -> impl Reply {
    let year = q.year.and_then(|y| y.trim().parse::<i32>().ok());
    let lookup = state.query.final_for(year);
    warp::reply::json(&Message {
        message: final_message(&lookup, year.unwrap_or_default()),
    })
}

fn options_reply(state: AppState) -> impl Reply {
    warp::reply::json(&Options {
        countries: state.summary.countries().collect(),
        years: state.summary.years(),
    })
}

fn wins_reply(state: AppState) -> impl Reply {
    warp::reply::json(&*state.map)
}

fn health_reply(state: AppState) -> impl Reply {
    warp::reply::json(&serde_json::json!({
        "status": "healthy",
        "finals": state.query.finals().len(),
    }))
}

/// All dashboard routes, ready for `warp::serve`.
pub fn routes(state: AppState) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let index = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::html(INDEX_HTML));

    let country = warp::path!("api" / "country")
        .and(warp::get())
        .and(warp::query::<CountryQuery>())
        .and(with_state(state.clone()))
        .map(country_reply);

    let year = warp::path!("api" / "year")
        .and(warp::get())
        .and(warp::query::<YearQuery>())
        .and(with_state(state.clone()))
        .map(year_reply);

    let options = warp::path!("api" / "options")
        .and(warp::get())
        .and(with_state(state.clone()))
        .map(options_reply);

    let wins = warp::path!("api" / "wins")
        .and(warp::get())
        .and(with_state(state.clone()))
        .map(wins_reply);

    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_state(state))
        .map(health_reply);

    index
        .or(country)
        .or(year)
        .or(options)
        .or(wins)
        .or(health)
        .with(warp::trace::request())
}
