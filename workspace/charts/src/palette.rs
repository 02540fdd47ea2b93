use serde::Serialize;
use thiserror::Error;

pub const SERIES_COLORS: [&str; 4] = ["#6366F1", "#22D3EE", "#FBBF24", "#EF4444"];
pub const SLICE_COLORS: [&str; 6] = ["#6366F1", "#22D3EE", "#FBBF24", "#EF4444", "#10B981", "#E879F9"];
pub const FORECAST_COLORS: [&str; 1] = ["#8884d8"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette needs at least one color")]
    Empty,

    #[error("palette color at position {0} is blank")]
    BlankColor(usize),
}

/// Ordered list of colors handed to a renderer. Indexing cycles, so any
/// number of series or slices can be colored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new<I, S>(colors: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        if let Some(position) = colors.iter().position(|c| c.trim().is_empty()) {
            return Err(PaletteError::BlankColor(position));
        }
        Ok(Self { colors })
    }

    /// Parses a comma-separated list such as `"#111111, #222222"`.
    pub fn parse(list: &str) -> Result<Self, PaletteError> {
        Self::new(list.split(',').map(str::trim).filter(|c| !c.is_empty()))
    }

    /// Color for the `index`-th series or slice, wrapping around.
    pub fn color(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    fn from_static(colors: &[&str]) -> Self {
        Self {
            colors: colors.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// The palettes injected into the renderers: one for multi-series charts,
/// one for pie slices, one for the forecast line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartTheme {
    pub series: Palette,
    pub slices: Palette,
    pub forecast: Palette,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            series: Palette::from_static(&SERIES_COLORS),
            slices: Palette::from_static(&SLICE_COLORS),
            forecast: Palette::from_static(&FORECAST_COLORS),
        }
    }
}

impl ChartTheme {
    /// Default theme with a custom series palette; slices reuse it too.
    pub fn with_series_palette(palette: Palette) -> Self {
        Self {
            slices: palette.clone(),
            series: palette,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_cycles_past_palette_length() {
        let palette = Palette::new(["#a", "#b", "#c"]).unwrap();
        let picked: Vec<&str> = (0..7).map(|i| palette.color(i)).collect();
        assert_eq!(picked, vec!["#a", "#b", "#c", "#a", "#b", "#c", "#a"]);
    }

    #[test]
    fn test_new_rejects_empty_and_blank() {
        assert_eq!(Palette::new(Vec::<String>::new()), Err(PaletteError::Empty));
        assert_eq!(Palette::new(["#a", " "]), Err(PaletteError::BlankColor(1)));
    }

    #[test]
    fn test_parse_comma_separated() {
        let palette = Palette::parse(" #111111, #222222 ,").unwrap();
        assert_eq!(palette.colors(), &["#111111".to_string(), "#222222".to_string()]);
        assert_eq!(Palette::parse(" , "), Err(PaletteError::Empty));
    }

    #[test]
    fn test_default_theme_matches_dashboard_colors() {
        let theme = ChartTheme::default();
        assert_eq!(theme.series.len(), 4);
        assert_eq!(theme.slices.len(), 6);
        assert_eq!(theme.series.color(0), "#6366F1");
        assert_eq!(theme.slices.color(5), "#E879F9");
        assert_eq!(theme.forecast.color(3), "#8884d8");
    }
}
