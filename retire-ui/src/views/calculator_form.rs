//! Retirement calculator form.
//!
//! Eight numeric inputs in two columns, each with a `[?]` help button, a
//! Calculate action, a notification line, the results panel and the static
//! explanation. Every keystroke updates [`AppState`]; results only change
//! when Calculate succeeds.

use cursive::Cursive;
use cursive::align::HAlign;
use cursive::theme::{BaseColor, Color};
use cursive::utils::markup::StyledString;
use cursive::view::{Nameable, Resizable};
use cursive::views::{
    Button, Dialog, DummyView, EditView, HideableView, LinearLayout, Panel, TextView,
};
use retire_core::{CalculatorInputs, InputField};

use super::status_bar::{build_status_bar, hints};
use crate::presenter::{self, HOW_IT_WORKS, HOW_IT_WORKS_TITLE, SUBTITLE, TITLE};
use crate::state::{AppState, Notification, NotificationKind};
use crate::utils::format_number;

// View names for accessing components
const NOTIFICATION_VIEW: &str = "notification";
const RESULTS_PANEL: &str = "results";

const LABEL_WIDTH: usize = 29;
const INPUT_WIDTH: usize = 10;

type ResultsPanel = HideableView<Panel<TextView>>;

/// Display the calculator form as the root layer.
pub fn show_calculator_form(siv: &mut Cursive) {
    let inputs = siv
        .with_user_data(|state: &mut AppState| state.inputs)
        .unwrap_or_default();

    let (left, right) = InputField::all().split_at(4);
    let columns = LinearLayout::horizontal()
        .child(field_column(left, &inputs))
        .child(DummyView.fixed_width(2))
        .child(field_column(right, &inputs));

    let notification = TextView::new("")
        .h_align(HAlign::Center)
        .with_name(NOTIFICATION_VIEW);

    let results: ResultsPanel = HideableView::new(
        Panel::new(TextView::new(presenter::format_results(None))).title("Results"),
    )
    .hidden();

    let how_it_works = Panel::new(TextView::new(HOW_IT_WORKS)).title(HOW_IT_WORKS_TITLE);

    let status = build_status_bar(&[
        hints::TAB,
        hints::SHIFT_TAB,
        hints::ENTER,
        hints::ESC,
        hints::CTRL_Q,
    ]);

    let layout = LinearLayout::vertical()
        .child(TextView::new(SUBTITLE).h_align(HAlign::Center))
        .child(DummyView.fixed_height(1))
        .child(columns)
        .child(DummyView.fixed_height(1))
        .child(notification)
        .child(results.with_name(RESULTS_PANEL))
        .child(how_it_works)
        .child(status);

    let dialog = Dialog::around(layout)
        .title(TITLE)
        .button("Calculate", on_calculate)
        .padding_lrtb(1, 1, 0, 0);

    siv.add_layer(dialog);
}

/// One column of labeled inputs.
fn field_column(
    fields: &[InputField],
    inputs: &CalculatorInputs,
) -> LinearLayout {
    fields
        .iter()
        .fold(LinearLayout::vertical(), |column, field| {
            column.child(field_row(*field, inputs.get(*field)))
        })
}

/// Create a labeled field row with its help button.
fn field_row(
    field: InputField,
    value: f64,
) -> LinearLayout {
    let input = EditView::new()
        .content(format_number(value))
        .on_edit(move |s, text, _| on_edit(s, field, text))
        .on_submit(|s, _| on_calculate(s))
        .with_name(field.key())
        .fixed_width(INPUT_WIDTH);

    LinearLayout::horizontal()
        .child(TextView::new(format!("{:>LABEL_WIDTH$} ", field.label())))
        .child(input)
        .child(Button::new_raw(" [?]", move |s| show_help(s, field)))
}

fn on_edit(
    siv: &mut Cursive,
    field: InputField,
    text: &str,
) {
    siv.with_user_data(|state: &mut AppState| state.edit_field(field, text));
}

/// Runs the projection and refreshes the notification and results.
fn on_calculate(siv: &mut Cursive) {
    let Some((notification, results)) = siv.with_user_data(|state: &mut AppState| {
        let notification = state.calculate();
        (notification, state.results)
    }) else {
        return;
    };

    siv.call_on_name(NOTIFICATION_VIEW, |v: &mut TextView| {
        v.set_content(styled_notification(&notification));
    });

    if let Some(results) = results {
        siv.call_on_name(RESULTS_PANEL, |v: &mut ResultsPanel| {
            v.get_inner_mut()
                .get_inner_mut()
                .set_content(presenter::format_results(Some(&results)));
            v.unhide();
        });
    }
}

fn styled_notification(notification: &Notification) -> StyledString {
    let color = match notification.kind {
        NotificationKind::Info => Color::Dark(BaseColor::Green),
        NotificationKind::Error => Color::Dark(BaseColor::Red),
    };
    let mut text = StyledString::styled(notification.title, color);
    text.append_styled(" ", color);
    text.append_plain(notification.description);
    text
}

fn show_help(
    siv: &mut Cursive,
    field: InputField,
) {
    siv.add_layer(Dialog::info(field.help()).title(field.label()));
}

/// Esc closes an open help layer, then clears the notification, then quits.
pub fn on_escape(siv: &mut Cursive) {
    if siv.screen().len() > 1 {
        siv.pop_layer();
        return;
    }

    let had_notification = siv
        .with_user_data(|state: &mut AppState| {
            let shown = state.notification.is_some();
            state.dismiss_notification();
            shown
        })
        .unwrap_or(false);

    if had_notification {
        siv.call_on_name(NOTIFICATION_VIEW, |v: &mut TextView| v.set_content(""));
    } else {
        siv.quit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form() -> Cursive {
        let mut siv = Cursive::new();
        siv.set_user_data(AppState::new());
        show_calculator_form(&mut siv);
        siv
    }

    fn field_text(
        siv: &mut Cursive,
        field: InputField,
    ) -> String {
        siv.call_on_name(field.key(), |v: &mut EditView| v.get_content().to_string())
            .unwrap_or_default()
    }

    fn notification_text(siv: &mut Cursive) -> String {
        siv.call_on_name(NOTIFICATION_VIEW, |v: &mut TextView| {
            v.get_content().source().to_string()
        })
        .unwrap_or_default()
    }

    fn results_panel(siv: &mut Cursive) -> (bool, String) {
        siv.call_on_name(RESULTS_PANEL, |v: &mut ResultsPanel| {
            let visible = v.is_visible();
            let text = v
                .get_inner_mut()
                .get_inner_mut()
                .get_content()
                .source()
                .to_string();
            (visible, text)
        })
        .unwrap_or_default()
    }

    #[test]
    fn fields_start_with_defaults() {
        let mut siv = form();

        assert_eq!(field_text(&mut siv, InputField::CurrentAge), "30");
        assert_eq!(field_text(&mut siv, InputField::CurrentIncome), "50000");
        assert_eq!(field_text(&mut siv, InputField::RetirementIncome), "80");
    }

    #[test]
    fn results_hidden_until_first_calculation() {
        let mut siv = form();

        let (visible, text) = results_panel(&mut siv);

        assert!(!visible);
        assert_eq!(text, "");
        assert_eq!(notification_text(&mut siv), "");
    }

    #[test]
    fn calculate_shows_results_and_info_notification() {
        let mut siv = form();

        on_calculate(&mut siv);

        let (visible, text) = results_panel(&mut siv);
        assert!(visible);
        assert!(text.contains("$569,339"));
        assert!(text.contains("$464"));
        assert_eq!(
            notification_text(&mut siv),
            "Calculation Complete Your retirement projection has been updated."
        );
    }

    #[test]
    fn invalid_ages_show_error_and_no_results() {
        let mut siv = form();
        on_edit(&mut siv, InputField::CurrentAge, "70");

        on_calculate(&mut siv);

        let (visible, _) = results_panel(&mut siv);
        assert!(!visible);
        assert_eq!(
            notification_text(&mut siv),
            "Invalid Ages Retirement age must be greater than current age"
        );
    }

    #[test]
    fn escape_closes_help_then_notification_then_quits() {
        let mut siv = form();
        on_calculate(&mut siv);
        show_help(&mut siv, InputField::InflationRate);
        assert_eq!(siv.screen().len(), 2);

        on_escape(&mut siv);
        assert_eq!(siv.screen().len(), 1);
        assert!(siv.is_running());

        on_escape(&mut siv);
        assert_eq!(notification_text(&mut siv), "");
        assert!(siv.is_running());

        on_escape(&mut siv);
        assert!(!siv.is_running());
    }
}
