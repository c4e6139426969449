//! Output filename derivation.
//!
//! Every derivative is written under the run's destination directory as
//! `<prefix><stem><suffix>[_D-M-YYYY].<ext>`. The date stamp uses unpadded
//! day and month (`7-3-2026`, not `07-03-2026`) and is off for normal batch
//! saves.
//!
//! There is no collision handling: two sources sharing a stem overwrite each
//! other when the date stamp is off. Long-standing behavior, kept as is.

use crate::config::RunConfig;
use chrono::{Datelike, Local, NaiveDate};
use std::path::{Path, PathBuf};

/// Derive the output path for a processed photo.
///
/// `date` controls the optional `_D-M-YYYY` stamp; passing the date in (as
/// opposed to reading the clock here) keeps the function deterministic.
pub fn output_file_name(
    config: &RunConfig,
    stem: &str,
    prefix: &str,
    date: Option<NaiveDate>,
    ext: &str,
) -> PathBuf {
    let mut name = format!("{prefix}{stem}{}", config.suffix);
    if let Some(d) = date {
        name.push_str(&format!("_{}-{}-{}", d.day(), d.month(), d.year()));
    }
    name.push('.');
    name.push_str(ext);
    config.dest_path.join(name)
}

/// [`output_file_name`] stamped with today's local date.
pub fn output_file_name_today(
    config: &RunConfig,
    stem: &str,
    prefix: &str,
    ext: &str,
) -> PathBuf {
    output_file_name(config, stem, prefix, Some(Local::now().date_naive()), ext)
}

/// Output path for `source` under the run's destination. No date stamp.
///
/// Sources with an unreadable stem (non-UTF-8) fall back to `photo`.
pub fn output_path_for(config: &RunConfig, source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("photo");
    output_file_name(config, stem, "", None, "jpg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Overrides;

    fn config_with_suffix(suffix: Option<&str>) -> RunConfig {
        RunConfig::build(Overrides {
            suffix: suffix.map(str::to_string),
            ..Overrides::default()
        })
        .unwrap()
    }

    #[test]
    fn derives_destination_stem_suffix_extension() {
        let config = config_with_suffix(None);
        assert_eq!(
            output_file_name(&config, "DSC_9521", "", None, "jpg"),
            PathBuf::from("watermarked/DSC_9521_wm.jpg")
        );
    }

    #[test]
    fn custom_suffix_and_prefix_are_inserted() {
        let config = config_with_suffix(Some("print"));
        assert_eq!(
            output_file_name(&config, "dawn", "best-", None, "jpg"),
            PathBuf::from("watermarked/best-dawn_print.jpg")
        );
    }

    #[test]
    fn date_stamp_uses_unpadded_day_month_year() {
        let config = config_with_suffix(None);
        let date = NaiveDate::from_ymd_opt(2019, 3, 7).unwrap();
        assert_eq!(
            output_file_name(&config, "dawn", "", Some(date), "jpg"),
            PathBuf::from("watermarked/dawn_wm_7-3-2019.jpg")
        );
    }

    #[test]
    fn derivation_is_deterministic_for_a_fixed_date() {
        let config = config_with_suffix(None);
        let date = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        let first = output_file_name(&config, "x", "", Some(date), "jpg");
        let second = output_file_name(&config, "x", "", Some(date), "jpg");
        assert_eq!(first, second);
        assert_eq!(first, PathBuf::from("watermarked/x_wm_31-12-2026.jpg"));
    }

    #[test]
    fn today_wrapper_stamps_the_current_local_date() {
        let config = config_with_suffix(None);
        let expected = output_file_name(
            &config,
            "dawn",
            "",
            Some(Local::now().date_naive()),
            "jpg",
        );
        assert_eq!(output_file_name_today(&config, "dawn", "", "jpg"), expected);
    }

    #[test]
    fn output_path_for_strips_source_directory_and_extension() {
        let config = config_with_suffix(None);
        assert_eq!(
            output_path_for(&config, Path::new("shoots/2019/DSC_1234.JPG")),
            PathBuf::from("watermarked/DSC_1234_wm.jpg")
        );
    }

    #[test]
    fn colliding_stems_map_to_the_same_output() {
        // Documented gap: without the date stamp the second write wins
        let config = config_with_suffix(None);
        let a = output_path_for(&config, Path::new("a/photo.jpg"));
        let b = output_path_for(&config, Path::new("b/photo.jpg"));
        assert_eq!(a, b);
    }
}
