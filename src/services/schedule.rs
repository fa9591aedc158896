use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDateTime;

use crate::db::entities::show;
use crate::services::view_models::ShowAppearance;

/// Wall-clock now, resolved per call.
pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// A show is upcoming only when it starts strictly after `now`.
pub fn is_upcoming(start_time: NaiveDateTime, now: NaiveDateTime) -> bool {
    start_time > now
}

/// Splits into `(past, upcoming)`, preserving order within each side.
pub fn split_past_upcoming(
    appearances: Vec<ShowAppearance>,
    now: NaiveDateTime,
) -> (Vec<ShowAppearance>, Vec<ShowAppearance>) {
    let (upcoming, past) = appearances
        .into_iter()
        .partition(|appearance| is_upcoming(appearance.start_time, now));
    (past, upcoming)
}

/// Distinct ids picked from `shows`, sorted.
pub fn distinct_ids(shows: &[show::Model], pick: impl Fn(&show::Model) -> i32) -> Vec<i32> {
    shows
        .iter()
        .map(pick)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Pairs each show with its counterpart looked up in `counterparts`; shows
/// whose counterpart vanished are dropped.
pub fn appearances<T>(
    shows: Vec<show::Model>,
    counterparts: &HashMap<i32, T>,
    counterpart_id: impl Fn(&show::Model) -> i32,
    describe: impl Fn(&T) -> (String, Option<String>),
) -> Vec<ShowAppearance> {
    shows
        .into_iter()
        .filter_map(|show| {
            let id = counterpart_id(&show);
            counterparts.get(&id).map(|counterpart| {
                let (name, image_link) = describe(counterpart);
                ShowAppearance {
                    id,
                    name,
                    image_link,
                    start_time: show.start_time,
                }
            })
        })
        .collect()
}
