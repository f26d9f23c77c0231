use std::fmt::{self, Write as _};

use chrono::{Datelike as _, NaiveDate};
use model::{
    day::DayRecord,
    record_set::{Layout, RecordSet},
    totals::Totals,
};

const WEEKDAYS: [&str; 7] = ["Pn", "Wt", "Śr", "Cz", "Pt", "So", "Nd"];

const MONTHS: [&str; 12] = [
    "styczeń",
    "luty",
    "marzec",
    "kwiecień",
    "maj",
    "czerwiec",
    "lipiec",
    "sierpień",
    "wrzesień",
    "październik",
    "listopad",
    "grudzień",
];

pub fn render(set: &RecordSet) -> Result<String, fmt::Error> {
    match set.layout {
        Layout::Days => render_list(set),
        Layout::Calendar { month } => {
            let mut out = render_grid(set, month)?;
            out.push('\n');
            out.push_str(&render_list(set)?);
            Ok(out)
        }
    }
}

pub fn render_list(set: &RecordSet) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for (index, slot) in set.slots.iter().enumerate() {
        if let Some(day) = slot {
            writeln!(&mut out, "{:>3} {}", index, render_day(day)?)?;
        }
    }
    Ok(out)
}

fn render_day(day: &DayRecord) -> Result<String, fmt::Error> {
    let mut line = format!(
        "{} {}",
        day.date.format("%Y-%m-%d"),
        if day.completed { "[x]" } else { "[ ]" }
    );

    let running = [
        (day.running.distance.as_str(), "km"),
        (day.running.time.as_str(), "min"),
        (day.running.calories.as_str(), "kcal"),
    ]
    .iter()
    .filter(|(value, _)| !value.is_empty())
    .map(|(value, unit)| format!("{} {}", value, unit))
    .collect::<Vec<_>>();
    if !running.is_empty() {
        write!(&mut line, " | bieg: {}", running.join(", "))?;
    }
    if !day.strength.calories.is_empty() {
        write!(&mut line, " | siłownia: {} kcal", day.strength.calories)?;
    }
    if !day.note.is_empty() {
        write!(&mut line, " | {}", day.note.replace('\n', " "))?;
    }
    Ok(line)
}

pub fn render_grid(set: &RecordSet, month: NaiveDate) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        &mut out,
        "{} {}",
        MONTHS[month.month0() as usize],
        month.year()
    )?;
    writeln!(&mut out, "{}", WEEKDAYS.map(|d| format!("{:>4}", d)).concat())?;

    for week in set.slots.chunks(7) {
        let row = week
            .iter()
            .map(|slot| match slot {
                Some(day) => format!(
                    "{:>3}{}",
                    day.date.day(),
                    if day.completed { "*" } else { " " }
                ),
                None => "    ".to_string(),
            })
            .collect::<String>();
        writeln!(&mut out, "{}", row.trim_end())?;
    }
    Ok(out)
}

pub fn render_totals(totals: &Totals) -> String {
    format!(
        "Treningi: {}/{}\nDystans: {} km\nCzas: {} min\nKalorie (bieg): {}\nKalorie (siłownia): {}\nKalorie razem: {}",
        totals.completed,
        totals.days,
        totals.distance,
        totals.time,
        totals.running_calories,
        totals.strength_calories,
        totals.calories(),
    )
}
