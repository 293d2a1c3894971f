//! Optional configuration.
//!
//! ```toml
//! lunar_phases = "tables/lunar-phases.txt"
//! solstices = "tables/solstices-equinoxes.txt"
//! first_year = 2001
//! last_year = 2100
//! ```
//!
//! Every key may be omitted; the defaults use the embedded tables.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::calendar::{FIRST_YEAR, LAST_YEAR};
use crate::error::LoadError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Lunar-phase table to read instead of the embedded one.
    #[serde(default)]
    pub lunar_phases: Option<PathBuf>,

    /// Solstice table to read instead of the embedded one.
    #[serde(default)]
    pub solstices: Option<PathBuf>,

    /// First Gregorian year accepted by queries, not before 2001.
    #[serde(default = "default_first_year")]
    pub first_year: i32,

    /// Last Gregorian year accepted by queries, not after 2100.
    #[serde(default = "default_last_year")]
    pub last_year: i32,
}

fn default_first_year() -> i32 {
    FIRST_YEAR
}
fn default_last_year() -> i32 {
    LAST_YEAR
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lunar_phases: None,
            solstices: None,
            first_year: default_first_year(),
            last_year: default_last_year(),
        }
    }
}

impl Config {
    /// Parses a TOML document.
    ///
    /// ```
    /// use plethonian::config::Config;
    ///
    /// let config = Config::from_toml_str("last_year = 2050").unwrap();
    /// assert_eq!((2001, 2050), (config.first_year, config.last_year));
    /// assert!(config.lunar_phases.is_none());
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, LoadError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The window may only narrow the default `FIRST_YEAR..=LAST_YEAR`.
    pub(crate) fn validate(&self) -> Result<(), LoadError> {
        let (first, last) = (self.first_year, self.last_year);
        if !(FIRST_YEAR <= first && first <= last && last <= LAST_YEAR) {
            return Err(LoadError::Window {
                first: self.first_year,
                last: self.last_year,
            });
        }
        Ok(())
    }
}

/// Reads the table at `path`, or returns `embedded` when there is none.
pub(crate) fn read_table(
    path: Option<&Path>,
    embedded: &'static str,
) -> Result<Cow<'static, str>, LoadError> {
    match path {
        None => Ok(Cow::Borrowed(embedded)),
        Some(path) => std::fs::read_to_string(path)
            .map(Cow::Owned)
            .map_err(|source| LoadError::Io {
                path: path.to_owned(),
                source,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::PlethonianCalendar;
    use crate::ephemeris::SOLSTICES;
    use crate::error::LookupError;
    use chrono::NaiveDate;

    #[test]
    fn defaults() {
        assert_eq!(Config::default(), Config::from_toml_str("").unwrap());
    }

    #[test]
    fn full_document() {
        let config = Config::from_toml_str(
            r#"
            lunar_phases = "a.txt"
            solstices = "b.txt"
            first_year = 2010
            last_year = 2020
            "#,
        )
        .unwrap();
        assert_eq!(Some(PathBuf::from("a.txt")), config.lunar_phases);
        assert_eq!(Some(PathBuf::from("b.txt")), config.solstices);
        assert_eq!((2010, 2020), (config.first_year, config.last_year));
    }

    #[test]
    fn rejected_documents() {
        assert!(matches!(
            Config::from_toml_str("unknown = 1"),
            Err(LoadError::Toml(_))
        ));
        assert!(matches!(
            Config::from_toml_str("first_year = \"2001\""),
            Err(LoadError::Toml(_))
        ));
        assert!(matches!(
            Config::from_toml_str("first_year = 2050\nlast_year = 2040"),
            Err(LoadError::Window {
                first: 2050,
                last: 2040
            })
        ));
    }

    #[test]
    fn window_cannot_widen() {
        for (doc, first, last) in [
            ("first_year = 1990", 1990, 2100),
            ("last_year = 2101", 2001, 2101),
            ("first_year = 1990\nlast_year = 2200", 1990, 2200),
        ] {
            assert!(
                matches!(
                    Config::from_toml_str(doc),
                    Err(LoadError::Window { first: f, last: l }) if (f, l) == (first, last)
                ),
                "{doc}"
            );
        }

        let config = Config {
            first_year: 1990,
            ..Config::default()
        };
        assert!(matches!(
            PlethonianCalendar::from_config(&config),
            Err(LoadError::Window { first: 1990, last: 2100 })
        ));
        assert!(Config::from_toml_str("first_year = 2001\nlast_year = 2100").is_ok());
    }

    #[test]
    fn missing_files() {
        let path = Path::new("/nonexistent/plethonian.toml");
        assert!(matches!(Config::load(path), Err(LoadError::Io { .. })));

        let config = Config {
            solstices: Some(PathBuf::from("/nonexistent/solstices.txt")),
            ..Config::default()
        };
        let err = PlethonianCalendar::from_config(&config).unwrap_err();
        assert!(matches!(err, LoadError::Io { ref path, .. } if path == Path::new("/nonexistent/solstices.txt")));
    }

    #[test]
    fn narrower_window() {
        let config = Config {
            first_year: 2010,
            last_year: 2020,
            ..Config::default()
        };
        let cal = PlethonianCalendar::from_config(&config).unwrap();
        assert_eq!(2010..=2020, cal.supported_years());
        let date = NaiveDate::from_ymd_opt(2009, 12, 31).unwrap();
        assert!(matches!(cal.day_for(date), Err(LookupError::OutOfRange { year: 2009, .. })));
        let date = NaiveDate::from_ymd_opt(2015, 6, 1).unwrap();
        assert_eq!(date, cal.day_for(date).unwrap().gregorian_date);
    }

    #[test]
    fn table_from_file() {
        let dir = std::env::temp_dir().join(format!("plethonian-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("solstices.txt");
        let text: String = SOLSTICES.lines().take(4).map(|l| format!("{l}\n")).collect();
        std::fs::write(&path, text).unwrap();

        let config = Config {
            solstices: Some(path),
            ..Config::default()
        };
        let cal = PlethonianCalendar::from_config(&config).unwrap();
        assert_eq!(3, cal.years().len());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
