//! # Command-Line Arguments
//!
//! ```text
//! storedesk [orders|products] [OPTIONS]
//!
//!   -s, --search <TERM>      Search term
//!   -t, --tab <TAB>          all | unfulfilled | unpaid | open | closed
//!   -p, --page <N>           Page number (clamped)
//!       --from <YYYY-MM-DD>  Date range start
//!       --to <YYYY-MM-DD>    Date range end
//!       --last-days <N>      Date range ending today
//!       --hide <COLUMN>      Hide a column (repeatable)
//!       --show <COLUMN>      Show a column (repeatable)
//!   -e, --export <SCOPE>     all | filtered
//!       --dialect <NAME>     verbatim | rfc4180
//!   -r, --refresh            Reset filters, page, selection and columns
//!   -c, --count <N>          Generate N synthetic orders instead of the seed
//!       --config <PATH>      Config file
//! ```
//!
//! Unparseable values are ignored and the default is kept.

use std::path::PathBuf;

use chrono::NaiveDate;
use storedesk_core::export::CsvDialect;
use storedesk_core::{DateRange, FilterState, TabId};

use crate::config::parse_dialect;
use crate::session::ExportScope;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListChoice {
    #[default]
    Orders,
    Products,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub list: ListChoice,
    pub search: String,
    pub tab: TabId,
    pub page: usize,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub last_days: Option<u32>,
    pub columns: Vec<(String, bool)>,
    pub export: Option<ExportScope>,
    pub dialect: Option<CsvDialect>,
    pub count: Option<usize>,
    pub refresh: bool,
    pub config: Option<PathBuf>,
    pub help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        CliArgs {
            list: ListChoice::Orders,
            search: String::new(),
            tab: TabId::All,
            page: 1,
            from: None,
            to: None,
            last_days: None,
            columns: Vec::new(),
            export: None,
            dialect: None,
            count: None,
            refresh: false,
            config: None,
            help: false,
        }
    }
}

pub const USAGE: &str = "\
Usage: storedesk [orders|products] [OPTIONS]

Options:
  -s, --search <TERM>      Search term
  -t, --tab <TAB>          all | unfulfilled | unpaid | open | closed
  -p, --page <N>           Page number (default: 1)
      --from <YYYY-MM-DD>  Date range start
      --to <YYYY-MM-DD>    Date range end
      --last-days <N>      Date range ending today
      --hide <COLUMN>      Hide a column
      --show <COLUMN>      Show a column
  -e, --export <SCOPE>     Export all | filtered records as CSV
      --dialect <NAME>     verbatim | rfc4180
  -r, --refresh            Reset the view after loading
  -c, --count <N>          Generate N synthetic orders
      --config <PATH>      Config file path
  -h, --help               Show this help message";

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn parse_scope(value: &str) -> Option<ExportScope> {
    match value.to_ascii_lowercase().as_str() {
        "all" => Some(ExportScope::All),
        "filtered" => Some(ExportScope::Filtered),
        _ => None,
    }
}

/// Parses arguments, skipping the program name.
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().skip(1).collect();
    let mut parsed = CliArgs::default();

    let mut i = 0;
    while i < args.len() {
        let value = args.get(i + 1).map(String::as_str);
        let mut consumed = value.is_some();

        match (args[i].as_str(), value) {
            ("orders", _) => {
                parsed.list = ListChoice::Orders;
                consumed = false;
            }
            ("products", _) => {
                parsed.list = ListChoice::Products;
                consumed = false;
            }
            ("--search" | "-s", Some(v)) => parsed.search = v.to_string(),
            ("--tab" | "-t", Some(v)) => parsed.tab = TabId::from(v),
            ("--page" | "-p", Some(v)) => {
                if let Ok(page) = v.parse() {
                    parsed.page = page;
                }
            }
            ("--from", Some(v)) => parsed.from = parse_date(v).or(parsed.from),
            ("--to", Some(v)) => parsed.to = parse_date(v).or(parsed.to),
            ("--last-days", Some(v)) => parsed.last_days = v.parse().ok().or(parsed.last_days),
            ("--hide", Some(v)) => parsed.columns.push((v.to_string(), false)),
            ("--show", Some(v)) => parsed.columns.push((v.to_string(), true)),
            ("--export" | "-e", Some(v)) => parsed.export = parse_scope(v).or(parsed.export),
            ("--dialect", Some(v)) => parsed.dialect = parse_dialect(v).or(parsed.dialect),
            ("--count" | "-c", Some(v)) => parsed.count = v.parse().ok().or(parsed.count),
            ("--config", Some(v)) => parsed.config = Some(PathBuf::from(v)),
            ("--refresh" | "-r", _) => {
                parsed.refresh = true;
                consumed = false;
            }
            ("--help" | "-h", _) => {
                parsed.help = true;
                consumed = false;
            }
            _ => consumed = false,
        }

        i += if consumed { 2 } else { 1 };
    }

    parsed
}

impl CliArgs {
    /// Filter described by the arguments. `--last-days` wins over
    /// `--from`/`--to`.
    pub fn filter_state(&self, today: NaiveDate) -> FilterState {
        let range = match self.last_days {
            Some(days) => Some(DateRange::last_days(days, today)),
            None if self.from.is_some() || self.to.is_some() => Some(DateRange {
                from: self.from,
                to: self.to,
            }),
            None => None,
        };

        FilterState {
            search_term: self.search.clone(),
            tab: self.tab.clone(),
            date_range: range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> CliArgs {
        parse_args(
            std::iter::once("storedesk".to_string())
                .chain(line.split_whitespace().map(String::from)),
        )
    }

    #[test]
    fn test_defaults() {
        let args = parse("");
        assert_eq!(args, CliArgs::default());
        assert_eq!(args.filter_state(NaiveDate::MIN), FilterState::default());
    }

    #[test]
    fn test_full_line() {
        let args = parse(
            "products --search tea -t closed --page 2 --hide brand --show sku -e filtered --dialect RFC4180",
        );
        assert_eq!(args.list, ListChoice::Products);
        assert_eq!(args.search, "tea");
        assert_eq!(args.tab, TabId::Closed);
        assert_eq!(args.page, 2);
        assert_eq!(
            args.columns,
            vec![("brand".to_string(), false), ("sku".to_string(), true)]
        );
        assert_eq!(args.export, Some(ExportScope::Filtered));
        assert_eq!(args.dialect, Some(CsvDialect::Rfc4180));
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let args = parse("--page two --from yesterday --export everything --count lots");
        assert_eq!(args.page, 1);
        assert_eq!(args.from, None);
        assert_eq!(args.export, None);
        assert_eq!(args.count, None);
    }

    #[test]
    fn test_date_range_arguments() {
        let today = NaiveDate::from_ymd_opt(2025, 9, 30).unwrap();

        let args = parse("--from 2025-07-01 --to 2025-09-30");
        let range = args.filter_state(today).date_range.unwrap();
        assert_eq!(range, DateRange::new(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(), today));

        let args = parse("--from 2025-07-01 --last-days 7");
        let range = args.filter_state(today).date_range.unwrap();
        assert_eq!(range.from, NaiveDate::from_ymd_opt(2025, 9, 23));

        let args = parse("--to 2025-09-30");
        assert!(!args.filter_state(today).date_range.unwrap().is_active());
    }

    #[test]
    fn test_help_flag() {
        assert!(parse("orders -h").help);
    }

    #[test]
    fn test_refresh_flag_takes_no_value() {
        let args = parse("--refresh --page 3");
        assert!(args.refresh);
        assert_eq!(args.page, 3);
    }
}
