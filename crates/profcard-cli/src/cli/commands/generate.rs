//! `profcard generate` – build a card and print it.

use super::build_profile;
use crate::cli::{FormArgs, OutputFormat};
use anyhow::Result;
use profcard_core::config::ProfcardConfig;
use profcard_core::export::card_json;
use profcard_core::Profile;

pub fn run_generate(
    cfg: &ProfcardConfig,
    args: &FormArgs,
    format: OutputFormat,
    allow_invalid: bool,
) -> Result<()> {
    let profile = build_profile(cfg, args, allow_invalid)?;
    match format {
        OutputFormat::Text => print!("{}", render_text(&profile)),
        OutputFormat::Json => println!("{}", card_json(&profile)?),
    }
    Ok(())
}

fn render_text(profile: &Profile) -> String {
    let mut out = format!(
        "{}\n{}\nCreated {}\n",
        profile.name(),
        profile.bio(),
        profile.created_at().format("%Y-%m-%d")
    );
    if !profile.social_links().is_empty() {
        out.push_str("\nSOCIAL MEDIA\n");
        for link in profile.social_links() {
            out.push_str(&format!(
                "{:<10} {:<20} {}\n",
                link.platform().display_name(),
                link.display_handle(),
                link.href()
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use profcard_core::profile::generate_profile_at;
    use profcard_core::FormData;

    #[test]
    fn text_card_lists_links() {
        let form = FormData {
            name: "Jane".into(),
            bio: "Hi".into(),
            github: "github.com/jane".into(),
            linkedin: "https://linkedin.com/company/acme".into(),
            ..Default::default()
        };
        let ts = chrono::Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let text = render_text(&generate_profile_at(&form, ts));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Jane");
        assert_eq!(lines[1], "Hi");
        assert_eq!(lines[2], "Created 2024-05-01");
        assert_eq!(lines[4], "SOCIAL MEDIA");
        assert!(lines[5].starts_with("Linkedin"));
        assert!(lines[5].contains("@profile"));
        assert!(lines[6].contains("@jane"));
        assert!(lines[6].ends_with("https://github.com/jane"));
    }

    #[test]
    fn text_card_without_links() {
        let profile = generate_profile_at(&FormData::default(), chrono::Utc::now());
        let text = render_text(&profile);
        assert!(!text.contains("SOCIAL MEDIA"));
        assert_eq!(text.lines().count(), 3);
    }
}
