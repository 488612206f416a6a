use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from("facetmap.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Facetmap Configuration
#
# Every table below overrides a compiled default; omit a section to keep
# the defaults. Keyword matching is case-insensitive containment.

[price]
# Per-day USD breakpoints: budget / mid / premium, anything above is luxury.
amount_breakpoints = [15.0, 40.0, 80.0]
score_breakpoints = [30.0, 60.0, 90.0]
confidence_cap = 0.8

[quality]
email_weight = 40
whatsapp_weight = 30
phone_weight = 20
website_weight = 10
verified_completion_min = 80
verified_contact_min = 50

[environment.jungle]
keywords = ["jungle", "forest", "nature", "trees", "tropical", "wildlife", "bamboo"]
areas = ["Ubud", "Gianyar", "Bangli", "Central Bali", "East Bali"]

[catalog]
top_style_limit = 4
top_rated_min = 4.8
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created facetmap.toml configuration file");

    Ok(())
}
