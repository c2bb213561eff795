//! A terminal form whose fields are cycled with Tab and shift-Tab.
//!
//! The form is a tiny [`Host`]: the container element is the form itself and
//! the fields are its focusable descendants. The demo reads crossterm key
//! events, translates them into tabtrap keystrokes, and hands them to a
//! [`FocusPolicy`] attached to the form.

use std::io::{Write, stdout};

use anyhow::Result;
use crossterm::{
    cursor, event as cevent, execute, queue,
    style::{self, Stylize},
    terminal,
};
use tabtrap::{
    FocusPolicy, Host, KeyEvent, backend::crossterm::translate_key, event::key::KeyCode,
};
use tracing::debug;

/// Handle to an element of the form: the container or one of its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormId {
    /// The form container.
    Form,
    /// A field, by position.
    Field(usize),
}

/// A single form field.
#[derive(Debug)]
pub struct Field {
    /// Display label.
    label: String,
    /// Element kind: `input` or `button`.
    tag: &'static str,
    /// Disabled fields are skipped by the cycle.
    disabled: bool,
}

/// A toy form implementing [`Host`].
#[derive(Debug, Default)]
pub struct Form {
    /// Fields in display order.
    fields: Vec<Field>,
    /// Index of the focused field.
    active: Option<usize>,
}

impl Form {
    /// A form with a fixed set of demo fields, one of them disabled.
    pub fn sample() -> Self {
        let mut form = Form::default();
        form.push("input", "Name", false);
        form.push("input", "Email", false);
        form.push("input", "Subscribe", false);
        form.push("input", "Coupon", true);
        form.push("button", "Cancel", false);
        form.push("button", "Submit", false);
        form
    }

    /// Add a field to the end of the form.
    pub fn push(&mut self, tag: &'static str, label: &str, disabled: bool) {
        self.fields.push(Field {
            label: label.to_string(),
            tag,
            disabled,
        });
    }

    /// Does the field match the selector? The demo grammar is tag names and
    /// `*`, comma-separated; an empty selector matches everything.
    fn matches(&self, idx: usize, selector: &str) -> bool {
        let selector = selector.trim();
        selector.is_empty()
            || selector
                .split(',')
                .map(str::trim)
                .any(|s| s == "*" || s == self.fields[idx].tag)
    }
}

impl Host for Form {
    type Id = FormId;

    fn select(&self, root: &FormId, selector: &str) -> Vec<FormId> {
        if *root != FormId::Form {
            return vec![];
        }
        (0..self.fields.len())
            .filter(|&i| self.matches(i, selector))
            .map(FormId::Field)
            .collect()
    }

    fn tab_index_attr(&self, _el: &FormId) -> Option<i32> {
        None
    }

    fn tab_index(&self, el: &FormId) -> i32 {
        match el {
            FormId::Field(_) => 0,
            FormId::Form => -1,
        }
    }

    fn is_disabled(&self, el: &FormId) -> bool {
        match el {
            FormId::Field(i) => self.fields[*i].disabled,
            FormId::Form => false,
        }
    }

    fn closest(&self, el: &FormId, selector: &str) -> Option<FormId> {
        match el {
            FormId::Field(i) if self.matches(*i, selector) => Some(*el),
            _ => None,
        }
    }

    fn active(&self) -> Option<FormId> {
        self.active.map(FormId::Field)
    }

    fn focus(&mut self, el: &FormId, _prevent_scroll: bool) {
        // A fixed-size terminal form has no viewport to keep still, so the
        // scroll flag is moot here.
        if let FormId::Field(i) = el {
            self.active = Some(*i);
        }
    }
}

/// Draw the form.
fn render(form: &Form) -> Result<()> {
    let mut out = stdout();
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        style::Print("formgym - tab/shift-tab to cycle, q to quit")
    )?;
    for (i, field) in form.fields.iter().enumerate() {
        queue!(out, cursor::MoveTo(2, i as u16 + 2))?;
        let text = format!("[ {} ]", field.label);
        if form.active == Some(i) {
            queue!(out, style::PrintStyledContent(text.reverse()))?;
        } else if field.disabled {
            queue!(out, style::PrintStyledContent(text.dim()))?;
        } else {
            queue!(out, style::Print(text))?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Read key events and feed them to the policy until `q` or escape.
fn event_loop(form: &mut Form, policy: &FocusPolicy<Form>) -> Result<()> {
    loop {
        render(form)?;
        if let cevent::Event::Key(k) = cevent::read()? {
            if k.kind == cevent::KeyEventKind::Release {
                continue;
            }
            let key = translate_key(k);
            if key == 'q' || key == KeyCode::Esc {
                return Ok(());
            }
            let mut evt = KeyEvent::new(key, FormId::Form);
            if let Some(moved) = policy.init(form, &mut evt)? {
                debug!("focused {:?}", moved);
            }
        }
    }
}

/// Run the demo in the alternate screen, restoring the terminal on exit.
pub fn run(mut form: Form, policy: &FocusPolicy<Form>) -> Result<()> {
    terminal::enable_raw_mode()?;
    execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
    let result = event_loop(&mut form, policy);
    execute!(stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}
