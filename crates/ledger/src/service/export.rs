use eyre::Result;
use model::{day::DayRecord, record_set::RecordSet};

pub const HEADER: [&str; 7] = [
    "Data",
    "Trening",
    "Zaliczony",
    "Kalorie",
    "Dystans (km)",
    "Czas (min)",
    "Notatka",
];

pub fn render_csv(set: &RecordSet) -> Result<String> {
    let mut writer = DayWriter::new()?;
    for day in set.records() {
        writer.write(day)?;
    }
    writer.finish()
}

pub struct DayWriter {
    wtr: csv::Writer<Vec<u8>>,
}

impl DayWriter {
    pub fn new() -> Result<Self> {
        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(vec![]);
        wtr.write_record(HEADER)?;
        Ok(Self { wtr })
    }

    pub fn write(&mut self, day: &DayRecord) -> Result<()> {
        self.wtr.write_record([
            day.date.format("%Y-%m-%d").to_string(),
            training_kind(day).to_string(),
            if day.completed { "tak" } else { "nie" }.to_string(),
            day.total_calories()
                .map(|c| c.to_string())
                .unwrap_or_default(),
            day.running.distance.clone(),
            day.running.time.clone(),
            day.note.clone(),
        ])?;
        Ok(())
    }

    /// Rows joined by `\n`, without a trailing terminator.
    pub fn finish(self) -> Result<String> {
        let buff = self.wtr.into_inner()?;
        let mut out = String::from_utf8(buff)?;
        if out.ends_with('\n') {
            out.pop();
        }
        Ok(out)
    }
}

fn training_kind(day: &DayRecord) -> &'static str {
    match (day.running.is_empty(), day.strength.is_empty()) {
        (false, false) => "Bieganie + Siłownia",
        (false, true) => "Bieganie",
        (true, false) => "Siłownia",
        (true, true) => "",
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use model::{
        field::{Field, RunningField, StrengthField},
        record_set::Layout,
    };

    use super::*;

    fn set_of_two() -> RecordSet {
        RecordSet {
            layout: Layout::Days,
            slots: vec![
                Some(DayRecord::new(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap())),
                Some(DayRecord::new(NaiveDate::from_ymd_opt(2024, 4, 2).unwrap())),
            ],
        }
    }

    #[test]
    fn test_two_records_three_lines() {
        let set = set_of_two()
            .toggle_completed(0)
            .set_field(0, Field::Running(RunningField::Distance), "5")
            .set_field(0, Field::Running(RunningField::Time), "30")
            .set_field(0, Field::Running(RunningField::Calories), "320")
            .set_field(1, Field::Strength(StrengthField::Calories), "150");
        let csv = render_csv(&set).unwrap();
        let lines = csv.split('\n').collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "Data,Trening,Zaliczony,Kalorie,Dystans (km),Czas (min),Notatka",
                "2024-04-01,Bieganie,tak,320.00,5,30,",
                "2024-04-02,Siłownia,nie,150.00,,,",
            ]
        );
    }

    #[test]
    fn test_empty_day_row() {
        let csv = render_csv(&set_of_two()).unwrap();
        assert_eq!(csv.lines().nth(1), Some("2024-04-01,,nie,,,,"));
    }

    #[test]
    fn test_combined_training() {
        let set = set_of_two()
            .set_field(0, Field::Running(RunningField::Calories), "200")
            .set_field(0, Field::Strength(StrengthField::Calories), "100.5");
        let csv = render_csv(&set).unwrap();
        assert_eq!(
            csv.lines().nth(1),
            Some("2024-04-01,Bieganie + Siłownia,nie,300.50,,,")
        );
    }

    #[test]
    fn test_note_is_escaped() {
        let note = "interwały, 6x400\n\"mocno\"";
        let set = set_of_two().set_field(1, Field::Note, note);
        let csv = render_csv(&set).unwrap();
        assert!(csv.ends_with("\"interwały, 6x400\n\"\"mocno\"\"\""));

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let rows = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].len(), 7);
        assert_eq!(&rows[1][6], note);
    }

    #[test]
    fn test_padding_is_skipped() {
        let set = RecordSet::month(NaiveDate::from_ymd_opt(2023, 10, 1).unwrap());
        let csv = render_csv(&set).unwrap();
        assert_eq!(csv.lines().count(), 1 + 31);
        assert!(csv.lines().nth(1).unwrap().starts_with("2023-10-01,"));
    }
}
