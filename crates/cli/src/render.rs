use minilatro_core::{Card, RoundState, ScoreBreakdown};

pub fn format_hand(round: &RoundState) -> String {
    let hand = round.hand();
    let mut lines = vec![
        format!("== Hand == ({} cards)", hand.len()),
        format!("{:>4}  {:<5} {:>5}  {}", "idx", "card", "chips", "glyph"),
    ];
    for (idx, card) in hand.iter().enumerate() {
        lines.push(format!(
            "{:>4}  {:<5} {:>5}  {}",
            idx,
            card.to_string(),
            round.tables.rank_chips(card.rank),
            card.glyph()
        ));
    }
    lines.join("\n")
}

pub fn format_status(round: &RoundState) -> String {
    format!(
        "seed {} | hands {} | discards {} | deck {} | score {}",
        round.seed(),
        round.hands_left(),
        round.discards_left(),
        round.draw_pile_len(),
        round.total_score()
    )
}

pub fn format_breakdown(breakdown: &ScoreBreakdown, played: &[Card]) -> String {
    let scoring: Vec<String> = breakdown
        .scoring_indices
        .iter()
        .filter_map(|idx| played.get(*idx))
        .map(ToString::to_string)
        .collect();
    format!(
        "{}: ({} + {}) x {} = {}  [{}]",
        breakdown.category.display_name(),
        breakdown.base.chips,
        breakdown.rank_chips,
        breakdown.base.mult,
        breakdown.value(),
        scoring.join(" ")
    )
}

pub fn help_text() -> &'static str {
    "Commands:\n  \
     <idx> [idx ...]      play the cards at those positions\n  \
     <idx> [idx ...] d    discard them instead\n  \
     save|s [path]        save the action log\n  \
     help|h|?             show help\n  \
     quit|q|exit          leave"
}
