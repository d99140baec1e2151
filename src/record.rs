use crate::{parse_industries, parse_net_worth};

/// One normalized entry for one person in one year.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Billionaire {
    pub name: String,
    pub age: Option<u32>,
    /// In billions.
    pub net_worth: f64,
    pub industry: String,
    /// All parsed industries, joined with `, `.
    pub source_of_wealth: String,
    pub title: String,
    pub organization: String,
    pub is_self_made: bool,
    pub year: Option<u32>,
    pub wealth_status: String,
    /// Only present if requested, see [`crate::merge::Options::with_profile`].
    #[serde(flatten)]
    pub profile: Option<Profile>,
}

/// Additional personal fields which are not part of the default output.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    pub residence: String,
    pub citizenship: String,
    pub gender: String,
}

/// A view on a CSV record which treats missing columns like empty fields.
pub struct Row<'a> {
    headers: &'a csv::StringRecord,
    record: &'a csv::StringRecord,
}

impl<'a> Row<'a> {
    pub fn new(headers: &'a csv::StringRecord, record: &'a csv::StringRecord) -> Self {
        Row { headers, record }
    }

    /// Return the value of `column`, or an empty string if there is no such column or the row is too short.
    /// If `column` appears multiple times in the header, the last one wins.
    pub fn get(&self, column: &str) -> &'a str {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, name)| *name == column)
            .map(|(idx, _)| idx)
            .last()
            .and_then(|idx| self.record.get(idx))
            .unwrap_or_default()
    }

    /// Like [`get()`][Self::get()], but `None` if the value is empty.
    fn non_empty(&self, column: &str) -> Option<&'a str> {
        Some(self.get(column)).filter(|value| !value.is_empty())
    }
}

impl Billionaire {
    /// Normalize `row` into a record. This never fails, unusable fields fall back to their defaults.
    pub fn from_row(row: &Row<'_>, with_profile: bool) -> Self {
        let industries = parse_industries(row.get("business_industries"));
        Billionaire {
            name: match row.non_empty("full_name") {
                Some(name) => name.to_owned(),
                None => format!("{} {}", row.get("first_name"), row.get("last_name"))
                    .trim()
                    .to_owned(),
            },
            age: parse_digits(row.get("age")),
            net_worth: parse_net_worth(row.get("net_worth")),
            industry: row
                .non_empty("business_category")
                .or_else(|| industries.first().map(String::as_str))
                .unwrap_or("Unknown")
                .to_owned(),
            source_of_wealth: industries.join(", "),
            title: row.get("position_in_organization").to_owned(),
            organization: row.get("organization_name").to_owned(),
            is_self_made: row.get("self_made").eq_ignore_ascii_case("true"),
            year: parse_digits(row.get("year")),
            wealth_status: row.get("wealth_status").to_owned(),
            profile: with_profile.then(|| Profile {
                residence: row.get("city_of_residence").to_owned(),
                citizenship: row.get("country_of_citizenship").to_owned(),
                gender: row.get("gender").to_owned(),
            }),
        }
    }
}

/// Read all rows of the CSV stream `csv`, which must have a header line, and normalize each of them.
pub fn read_records(csv: impl std::io::Read, with_profile: bool) -> Result<Vec<Billionaire>, csv::Error> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv);
    let headers = csv.headers()?.clone();
    let mut out = Vec::new();
    let mut record = csv::StringRecord::new();
    while csv.read_record(&mut record)? {
        out.push(Billionaire::from_row(&Row::new(&headers, &record), with_profile));
    }
    Ok(out)
}

/// Parse `value` only if it consists entirely of ASCII digits.
fn parse_digits(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
