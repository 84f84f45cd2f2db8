use biomecalc_classifier::Biome;

use crate::error::CliError;

/// Looks a biome up by code (decimal or `0x` hex) or by name.
pub fn lookup(query: &str) -> Result<Biome, CliError> {
    let code = match query.strip_prefix("0x").or_else(|| query.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16).ok(),
        None => query.parse::<u8>().ok(),
    };
    let biome = match code {
        Some(code) => Biome::try_from_code(code)?,
        None => query.parse()?,
    };
    Ok(biome)
}

pub fn table_header() -> String {
    format!("{:>4}  {:<4}  {:<13}  {:<19}  {:<17}  {}", "code", "hex", "category", "name", "common name", "icon")
}

pub fn table_row(biome: Biome) -> String {
    format!(
        "{:>4}  0x{:02x}  {:<13}  {:<19}  {:<17}  {}",
        biome.code(),
        biome.code(),
        format!("{:?}", biome.category()),
        biome.name(),
        biome.common_name(),
        biome.icon()
    )
}

pub fn details(biome: Biome) -> String {
    let [r, g, b] = biome.map_color();
    format!(
        "{name} (0x{code:02x} = {code})\n  category:  {category:?}\n  common:    {common}\n  technical: {technical}\n  icon:      {icon}\n  color:     #{r:02x}{g:02x}{b:02x}",
        name = biome.name(),
        code = biome.code(),
        category = biome.category(),
        common = biome.common_name(),
        technical = biome.technical_name(),
        icon = biome.icon(),
    )
}
