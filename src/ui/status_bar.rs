use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::logic::action_menu::ActionMenuPlan;
use crate::model::SearchCriteria;
use crate::store::ShareItems;

/// Render the bottom status bar: counts on the left, key hints on the right
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    count: usize,
    session: u64,
    criteria: &SearchCriteria,
    plan: &ActionMenuPlan,
    last_share: Option<&ShareItems>,
) {
    let scope = if criteria.is_current_session_only {
        format!("session {}", session)
    } else {
        "all sessions".to_string()
    };

    let mut left = format!(" {} messages • {}", count, scope);
    if !criteria.is_default {
        left.push_str(" • filtered");
    }
    if let Some(share) = last_share {
        left.push_str(&format!(" • exported {}", share.path.display()));
    }

    // Hints track the actual plan, so an unavailable action never advertises
    let hints = match plan {
        ActionMenuPlan::Menu { .. } => "m actions  c session  e errors  q quit ",
        ActionMenuPlan::DirectShare { .. } => "s share  c session  e errors  q quit ",
        ActionMenuPlan::Hidden => "c session  e errors  q quit ",
    };

    let left_width = area.width.saturating_sub(hints.len() as u16) as usize;
    let line = Line::from(vec![
        Span::styled(
            format!("{:<width$}", left, width = left_width),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
