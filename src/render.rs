use crate::character::Character;
use crate::config::WidgetConfig;
use crate::contributor::Contributor;
use crate::seed::SeedSource;
use chrono::{DateTime, Utc};
use clap::ValueEnum;

const AVATAR_PX: u32 = 60;
const CHARACTER_PX: u32 = 48;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

pub struct ThemeColors {
    pub primary: &'static str,
    pub accent: &'static str,
    pub surface: &'static str,
    pub error: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                primary: "#c9d1d9",
                accent: "#161b22",
                surface: "#21262d",
                error: "#f85149",
            },
            Theme::Light => ThemeColors {
                primary: "#24292f",
                accent: "#ffffff",
                surface: "#f3f3f3",
                error: "#cf222e",
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// What the widget body shows.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    Cards(&'a [Contributor]),
    Error(&'a str),
}

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn build_card(contributor: &Contributor, seeds: &mut dyn SeedSource) -> String {
    let seed = seeds.next_seed();
    let login = escape_html(&contributor.login);

    format!(
        r#"<div class="contributor">
  <a href="{profile}" target="_blank" rel="noopener noreferrer">
    <img src="{avatar}" alt="{login}" class="avatar" width="{AVATAR_PX}" height="{AVATAR_PX}" />
    <span>{login}</span>
  </a>
  <div class="rpg-character">{character}</div>
  <p>Contributions: {contributions}</p>
  <p>Seed: {seed}</p>
</div>"#,
        profile = escape_html(&contributor.profile_url()),
        avatar = escape_html(&contributor.avatar_url),
        character = Character::from_seed(seed).to_svg(CHARACTER_PX),
        contributions = contributor.contributions,
    )
}

/// Renders the widget body. Draws one new seed per card on every call.
pub fn render_widget(
    config: &WidgetConfig,
    view: View<'_>,
    theme: Theme,
    seeds: &mut dyn SeedSource,
) -> String {
    let slug = escape_html(&format!("{}/{}", config.organization, config.repo));

    let (notice, cards) = match view {
        View::Cards(list) => {
            let cards: Vec<String> = list.iter().map(|c| build_card(c, seeds)).collect();
            (String::new(), cards.join("\n"))
        }
        View::Error(reason) => (
            format!(
                "<p class=\"contributors-error\" role=\"status\">Could not load contributors: {}</p>\n",
                escape_html(reason)
            ),
            String::new(),
        ),
    };

    format!(
        r#"<section class="github-rpg-contributors" data-theme="{theme}">
<h2>Contributors to <a href="{repo_url}" target="_blank" rel="noopener noreferrer">{slug}</a></h2>
{notice}<div class="contributors-list">{cards}</div>
</section>"#,
        theme = theme.name(),
        repo_url = escape_html(&config.repo_url()),
    )
}

fn stylesheet(theme: Theme) -> String {
    let c = theme.colors();
    format!(
        r#":root {{
  --theme-primary: {primary};
  --theme-accent: {accent};
  --theme-surface: {surface};
  --theme-error: {error};
}}
body {{ margin: 0; background-color: var(--theme-accent); }}
.github-rpg-contributors {{
  display: block;
  color: var(--theme-primary);
  background-color: var(--theme-accent);
  font-family: sans-serif;
  padding: 16px;
  border-radius: 8px;
}}
h2 {{ font-size: 1.2em; margin-bottom: 12px; }}
.contributors-list {{ display: flex; flex-wrap: wrap; gap: 16px; }}
.contributor {{
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 10px;
  background: var(--theme-surface);
  border-radius: 8px;
  text-align: center;
}}
.avatar {{ width: {AVATAR_PX}px; height: {AVATAR_PX}px; border: 2px solid var(--theme-primary); }}
.github-rpg-contributors a {{ text-decoration: none; color: var(--theme-primary); font-weight: bold; }}
.rpg-character {{ margin: 8px 0; }}
.contributors-error {{ color: var(--theme-error); }}
"#,
        primary = c.primary,
        accent = c.accent,
        surface = c.surface,
        error = c.error,
    )
}

/// Wraps a rendered widget in a standalone page.
pub fn render_page(
    config: &WidgetConfig,
    widget_html: &str,
    theme: Theme,
    generated_at: DateTime<Utc>,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>Contributors to {slug}</title>
<style>
{style}</style>
</head>
<body>
<main>
{widget_html}
</main>
<footer><small>Generated {generated}</small></footer>
</body>
</html>
"#,
        slug = escape_html(&format!("{}/{}", config.organization, config.repo)),
        style = stylesheet(theme),
        generated = generated_at.format("%Y-%m-%d %H:%M UTC"),
    )
}
