//! Interactive command implementation.
//!
//! A prompt loop over a [`Session`]: every action is one committed mutation,
//! and the table is reprinted from the fresh estimate after each step.

use crate::display::build_session;
use anyhow::{Context, Result};
use inquire::{InquireError, Select, Text};
use pacsize_lib::prelude::*;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Menu entries. Removal is only offered while more than one row remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Edit,
    Add,
    Remove,
    ChangeWindow,
    Quit,
}

impl Action {
    fn available(session: &Session) -> Vec<Self> {
        let mut actions = vec![Self::Edit, Self::Add];
        if session.can_remove() {
            actions.push(Self::Remove);
        }
        actions.extend([Self::ChangeWindow, Self::Quit]);
        actions
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Edit => "Editar linha",
            Self::Add => "Adicionar",
            Self::Remove => "Remover",
            Self::ChangeWindow => "Alterar período",
            Self::Quit => "Sair",
        };
        write!(f, "{label}")
    }
}

/// A row offered for selection, shown with its 1-based position.
#[derive(Debug, Clone, Copy)]
struct RowChoice {
    index: usize,
    row: Row,
}

impl std::fmt::Display for RowChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.index + 1, self.row)
    }
}

/// A modality option, showing the placeholder for the unselected sentinel.
#[derive(Debug, Clone, Copy)]
struct ModalityChoice(Modality);

impl std::fmt::Display for ModalityChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.label())
    }
}

/// Run the prompt loop until the user quits or cancels.
pub(crate) fn interactive(scenario: Option<&Path>) -> Result<()> {
    let mut session = build_session(scenario, &[], None)?;

    loop {
        print_table(&session)?;

        let Some(action) = ask(Select::new("Ação:", Action::available(&session)).prompt())?
        else {
            break;
        };

        match action {
            Action::Edit => edit_row(&mut session)?,
            Action::Add => {
                let index = session.add_row();
                println!("Linha {} adicionada.", index + 1);
            }
            Action::Remove => remove_row(&mut session)?,
            Action::ChangeWindow => change_window(&mut session)?,
            Action::Quit => break,
        }
    }

    info!(revisions = session.revision(), "interactive session finished");
    Ok(())
}

/// Maps a cancelled prompt to `None` and any other prompt failure to an error.
fn ask<T>(answer: Result<T, InquireError>) -> Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e).context("Prompt failed"),
    }
}

fn print_table(session: &Session) -> Result<()> {
    let mut out = BufWriter::new(std::io::stdout());
    writeln!(out)?;
    TableFormatter::new()
        .with_title(false)
        .write_report(session.state(), session.estimate(), &mut out)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn select_row(session: &Session, message: &str) -> Result<Option<usize>> {
    let choices: Vec<RowChoice> = session
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| RowChoice { index, row: *row })
        .collect();

    Ok(ask(Select::new(message, choices).prompt())?.map(|choice| choice.index))
}

fn edit_row(session: &mut Session) -> Result<()> {
    let Some(index) = select_row(session, "Linha:")? else {
        return Ok(());
    };
    let Some(field) = ask(Select::new("Campo:", RowField::all().to_vec()).prompt())? else {
        return Ok(());
    };

    let row = session.rows()[index];
    let value = if field.is_numeric() {
        let current = match field {
            RowField::Devices => row.devices.to_string(),
            RowField::StudiesPerDay => row.studies_per_day.to_string(),
            _ => row.study_size_mb.to_string(),
        };
        ask(Text::new(field.label()).with_initial_value(&current).prompt())?
    } else {
        let options: Vec<ModalityChoice> = std::iter::once(Modality::Unselected)
            .chain(Modality::all().iter().copied())
            .map(ModalityChoice)
            .collect();
        let cursor = options
            .iter()
            .position(|choice| choice.0 == row.modality)
            .unwrap_or(0);
        ask(Select::new(field.label(), options)
            .with_starting_cursor(cursor)
            .prompt())?
        .map(|choice| choice.0.as_str().to_string())
    };
    let Some(value) = value else {
        return Ok(());
    };

    if let Err(e) = session.update_field(index, field, &value) {
        println!("Valor inválido ({e}); valor anterior mantido.");
    }
    Ok(())
}

fn remove_row(session: &mut Session) -> Result<()> {
    let Some(index) = select_row(session, "Remover linha:")? else {
        return Ok(());
    };
    if session.remove_row(index) {
        println!("Linha {} removida.", index + 1);
    }
    Ok(())
}

fn change_window(session: &mut Session) -> Result<()> {
    let cursor = Window::all()
        .iter()
        .position(|w| *w == session.window())
        .unwrap_or(0);
    let selection = Select::new("Período:", Window::all().to_vec())
        .with_starting_cursor(cursor)
        .prompt();

    if let Some(window) = ask(selection)? {
        session.set_window(window);
    }
    Ok(())
}
