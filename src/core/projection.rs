use serde::{
    Deserialize,
    Serialize,
};

use crate::core::models::Quote;

/// How many of the displayed quotes feed the chart.
pub const CHART_TOP_N: usize = 5;

/// Chart labels longer than this are cut and ellipsized.
pub const CHART_LABEL_MAX: usize = 20;

/// Display order over vote count. Purely a view concern, never sent to the
/// backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Descending
    }
}

/// Label/value series for the chart renderer. Derived on demand from the
/// displayed list, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u32>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The displayed list: case-insensitive substring filter on the quote text,
/// then a stable sort by vote count. Ties keep the server's order.
pub fn visible_quotes<'a>(quotes: &'a [Quote], term: &str, order: SortOrder) -> Vec<&'a Quote> {
    let needle = term.to_lowercase();

    let mut visible: Vec<&Quote> =
        quotes.iter().filter(|quote| quote.text.to_lowercase().contains(&needle)).collect();

    visible.sort_by(|a, b| match order {
        SortOrder::Ascending => a.votes.cmp(&b.votes),
        SortOrder::Descending => b.votes.cmp(&a.votes),
    });

    visible
}

/// The top entries of the displayed list as a chart series.
pub fn chart_series(displayed: &[&Quote]) -> ChartSeries {
    let top = &displayed[..displayed.len().min(CHART_TOP_N)];

    ChartSeries {
        labels: top.iter().map(|quote| truncate_label(&quote.text)).collect(),
        values: top.iter().map(|quote| quote.votes).collect(),
    }
}

fn truncate_label(text: &str) -> String {
    if text.chars().count() > CHART_LABEL_MAX {
        let cut: String = text.chars().take(CHART_LABEL_MAX).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(id: &str, text: &str, votes: u32) -> Quote {
        Quote { id: id.to_string(), text: text.to_string(), votes }
    }

    #[test]
    fn descending_sort_and_chart_series() {
        let quotes = vec![quote("a", "hello world", 2), quote("b", "bye", 5)];

        let displayed = visible_quotes(&quotes, "", SortOrder::Descending);
        let ids: Vec<&str> = displayed.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);

        let series = chart_series(&displayed);
        assert_eq!(series.labels, ["bye", "hello world"]);
        assert_eq!(series.values, [5, 2]);
    }

    #[test]
    fn filter_is_case_insensitive_substring_match() {
        let quotes = vec![quote("a", "Hello World", 1), quote("b", "bye", 2)];

        let displayed = visible_quotes(&quotes, "WORLD", SortOrder::Ascending);
        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].id, "a");

        let displayed = visible_quotes(&quotes, "zzz", SortOrder::Ascending);
        assert!(displayed.is_empty());
    }

    #[test]
    fn empty_term_shows_everything() {
        let quotes = vec![quote("a", "one", 1), quote("b", "two", 2)];
        assert_eq!(visible_quotes(&quotes, "", SortOrder::Ascending).len(), 2);
    }

    #[test]
    fn ties_keep_server_order_under_either_direction() {
        let quotes =
            vec![quote("a", "first", 3), quote("b", "second", 3), quote("c", "third", 3)];

        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let ids: Vec<&str> =
                visible_quotes(&quotes, "", order).iter().map(|q| q.id.as_str()).collect();
            assert_eq!(ids, ["a", "b", "c"]);
        }
    }

    #[test]
    fn toggling_round_trips() {
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
        assert_eq!(SortOrder::Descending.toggled().toggled(), SortOrder::Descending);
    }

    #[test]
    fn chart_takes_at_most_five_entries() {
        let quotes: Vec<Quote> =
            (0..7).map(|i| quote(&format!("q{i}"), &format!("text {i}"), i)).collect();

        let displayed = visible_quotes(&quotes, "", SortOrder::Descending);
        let series = chart_series(&displayed);
        assert_eq!(series.values, [6, 5, 4, 3, 2]);
        assert_eq!(series.labels.len(), 5);
    }

    #[test]
    fn long_labels_are_truncated_with_ellipsis() {
        let quotes = vec![quote("a", "abcdefghijklmnopqrstuvwxyz", 1)];
        let displayed = visible_quotes(&quotes, "", SortOrder::Descending);

        let series = chart_series(&displayed);
        assert_eq!(series.labels, ["abcdefghijklmnopqrst..."]);
    }

    #[test]
    fn exactly_twenty_chars_is_left_alone() {
        let text = "a".repeat(20);
        let quotes = vec![quote("a", &text, 1)];
        let displayed = visible_quotes(&quotes, "", SortOrder::Descending);

        assert_eq!(chart_series(&displayed).labels, [text]);
    }
}
