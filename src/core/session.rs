// session module - the mutable state behind the window and its single dispatch point
use image::RgbaImage;

use super::actions::{Command, Effect};
use super::config::RenderConfig;
use super::error::Result;
use super::font::FontFace;
use super::highlight::HighlightSet;
use super::render;
use super::themes::{Theme, DEFAULT_THEME};

pub struct Session {
    source: String,
    config: RenderConfig,
    highlights: HighlightSet,
    face: FontFace,
    theme: &'static str,
}

impl Session {
    pub fn new() -> Result<Self> {
        let config = RenderConfig::default();
        let face = FontFace::load(&config.font)?;

        Ok(Self {
            source: String::new(),
            config,
            highlights: HighlightSet::new(),
            face,
            theme: DEFAULT_THEME,
        })
    }

    /// Applies one command. On error nothing has changed.
    pub fn dispatch(&mut self, command: Command) -> Result<Effect> {
        let effect = match command {
            Command::SetSource(source) => {
                // the preview only follows the text on Generate
                self.source = source;
                Effect::None
            }
            Command::SelectTheme(name) => {
                let theme = Theme::by_name(&name)?;
                self.config.apply_theme(theme);
                self.theme = theme.name;
                Effect::Rerender
            }
            Command::SetFont(spec) => {
                // load first so a bad font file leaves the old one in place
                self.face = FontFace::load(&spec)?;
                self.config.font = spec;
                Effect::Rerender
            }
            Command::SetColor(role, color) => {
                self.config.set_color(role, color);
                Effect::Rerender
            }
            Command::SetPadding(padding) => {
                self.config.set_padding(padding);
                Effect::Rerender
            }
            Command::SetWidth(width) => {
                self.config.set_width(width);
                Effect::Rerender
            }
            Command::SetHeight(height) => {
                self.config.set_height(height);
                Effect::Rerender
            }
            Command::SetWindowControls(enabled) => {
                self.config.window_controls = enabled;
                Effect::Rerender
            }
            Command::HighlightLines { from, to } => {
                self.highlights.add_range(from, to);
                Effect::Rerender
            }
            Command::ClearHighlights => {
                self.highlights.clear();
                Effect::Rerender
            }
            Command::Generate => Effect::Rerender,
            Command::Save => Effect::Export,
            Command::CopyImage => Effect::CopyToClipboard,
        };

        Ok(effect)
    }

    /// Immutable copy of the settings for one render
    pub fn snapshot(&self) -> RenderConfig {
        self.config.clone()
    }

    pub fn render(&self) -> Result<Option<RgbaImage>> {
        render::render(&self.source, &self.snapshot(), &self.highlights, &self.face)
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn highlights(&self) -> &HighlightSet {
        &self.highlights
    }

    pub fn theme_name(&self) -> &'static str {
        self.theme
    }

    pub fn line_count(&self) -> usize {
        render::source_lines(&self.source).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;
    use crate::core::config::ColorRole;
    use crate::core::error::Error;
    use crate::core::font::{FontFamily, FontSpec};

    fn session_with(source: &str) -> Session {
        let mut session = Session::new().unwrap();
        session.dispatch(Command::SetSource(source.to_string())).unwrap();
        session
    }

    #[test]
    fn test_highlight_clear_and_reverse() {
        let mut session = session_with("1\n2\n3\n4\n5\n6");

        session.dispatch(Command::HighlightLines { from: 3, to: 5 }).unwrap();
        let forward = session.highlights().clone();
        session.dispatch(Command::ClearHighlights).unwrap();
        assert!(session.highlights().is_empty());

        session.dispatch(Command::HighlightLines { from: 5, to: 3 }).unwrap();
        assert_eq!(session.highlights(), &forward);
    }

    #[test]
    fn test_light_theme_overwrites_manual_color() {
        let mut session = Session::new().unwrap();
        session
            .dispatch(Command::SetColor(ColorRole::Text, Color::rgb(10, 200, 10)))
            .unwrap();

        let effect = session.dispatch(Command::SelectTheme("Light".into())).unwrap();
        assert_eq!(effect, Effect::Rerender);

        let config = session.config();
        assert_eq!(config.background.to_string(), "#FFFFFF");
        assert_eq!(config.text.to_string(), "#1D1F21");
        assert_eq!(config.highlight.to_string(), "#E8E8E8");
        assert_eq!(session.theme_name(), "Light");
    }

    #[test]
    fn test_unknown_theme_changes_nothing() {
        let mut session = Session::new().unwrap();
        let before = session.snapshot();
        let result = session.dispatch(Command::SelectTheme("Nord".into()));
        assert!(matches!(result, Err(Error::UnknownTheme(_))));
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_bad_font_keeps_previous_font() {
        let mut session = Session::new().unwrap();
        let spec = FontSpec::new(FontFamily::File("/nonexistent.ttf".into()), 14.0);
        assert!(session.dispatch(Command::SetFont(spec)).is_err());
        assert_eq!(session.config().font, FontSpec::default());

        let proportional = FontSpec::new(FontFamily::Proportional, 14.0);
        session.dispatch(Command::SetFont(proportional.clone())).unwrap();
        assert_eq!(session.config().font, proportional);
    }

    #[test]
    fn test_effects() {
        let mut session = Session::new().unwrap();
        assert_eq!(session.dispatch(Command::SetSource("x".into())).unwrap(), Effect::None);
        assert_eq!(session.dispatch(Command::Generate).unwrap(), Effect::Rerender);
        assert_eq!(session.dispatch(Command::Save).unwrap(), Effect::Export);
        assert_eq!(session.dispatch(Command::CopyImage).unwrap(), Effect::CopyToClipboard);
        assert_eq!(session.dispatch(Command::SetPadding(12)).unwrap(), Effect::Rerender);
        assert_eq!(session.config().padding(), 12);
    }

    #[test]
    fn test_render_follows_settings() {
        let mut session = session_with("fn main() {\n    println!(\"hi\");\n}");
        session.dispatch(Command::SetWidth(1200)).unwrap();
        session.dispatch(Command::SetHeight(400)).unwrap();
        session.dispatch(Command::HighlightLines { from: 2, to: 99 }).unwrap();

        let image = session.render().unwrap().unwrap();
        assert_eq!(image.dimensions(), (1200, 400));
        assert_eq!(session.line_count(), 3);
    }

    #[test]
    fn test_blank_session_renders_nothing() {
        let session = session_with("  \n ");
        assert!(session.render().unwrap().is_none());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut session = Session::new().unwrap();
        let snapshot = session.snapshot();
        session.dispatch(Command::SetWindowControls(false)).unwrap();
        assert!(snapshot.window_controls);
        assert!(!session.config().window_controls);
    }
}
