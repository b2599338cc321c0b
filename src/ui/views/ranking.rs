use crate::domain::entities::Ranking;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// A ranked recipe listing
pub struct RankingView<'a> {
    ranking: &'a Ranking,
}

impl<'a> RankingView<'a> {
    pub fn new(ranking: &'a Ranking) -> Self {
        Self { ranking }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        if self.ranking.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning(format!(
                    "No results: no recipes found for \"{}\".",
                    self.ranking.category_name()
                ))
                .render(supports_color)
            ));
            return out;
        }

        let title = format!(
            "--- Top {} recipes for \"{}\" ---",
            self.ranking.len(),
            self.ranking.category_name()
        );
        out.push('\n');
        out.push_str(&ColoredText::success(title).bold().render(supports_color));
        out.push('\n');

        for recipe in self.ranking.recipes() {
            out.push_str(&format!(
                "\n{} {}\n",
                ColoredText::warning(format!(
                    "{}[{}]",
                    Icon::Rank.render(supports_unicode),
                    recipe.rank
                ))
                .render(supports_color),
                ColoredText::plain(recipe.title.as_str()).bold().render(supports_color)
            ));
            if !recipe.description.is_empty() {
                out.push_str(&format!("  Description: {}\n", recipe.description));
            }
            if !recipe.url.is_empty() {
                out.push_str(&format!(
                    "  URL: {}\n",
                    ColoredText::dim(recipe.url.as_str()).render(supports_color)
                ));
            }
        }

        out
    }
}
