//! Terminal front-end: renders the view state and feeds stdin commands to
//! the controller, one at a time.

use std::fmt::Write as _;
use std::io::Write as _;
use std::str::FromStr;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::HrApi;
use crate::app::{App, FormField, ViewState};
use crate::model::AttendanceStatus;

const HELP: &str = "\
Commands:
  set <field> <value>   fill a form field (employee_id, full_name, email, department)
  add                   submit the add-employee form
  view <id>             show attendance for an employee
  present | absent      mark today's attendance for the selected employee
  delete <id>           delete an employee
  refresh               reload the employee list
  help                  show this message
  quit                  exit";

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(FormField, String),
    Add,
    Delete(u64),
    View(u64),
    Mark(AttendanceStatus),
    Refresh,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Errors carry the message to print back.
    pub fn parse(line: &str) -> Result<Command, String> {
        let trimmed = line.trim();
        let (head, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        let rest = rest.trim();
        match head {
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .ok_or("Usage: set <field> <value>".to_string())?;
                let field = FormField::from_str(field).map_err(|_| {
                    format!("Unknown field '{field}' (expected employee_id, full_name, email or department)")
                })?;
                Ok(Command::Set(field, value.trim().to_string()))
            }
            "add" => Ok(Command::Add),
            "delete" => parse_id(rest, "delete").map(Command::Delete),
            "view" => parse_id(rest, "view").map(Command::View),
            "refresh" => Ok(Command::Refresh),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => match AttendanceStatus::from_str(other) {
                Ok(status) => Ok(Command::Mark(status)),
                Err(_) => Err(format!("Unknown command '{other}' (try 'help')")),
            },
        }
    }
}

fn parse_id(arg: &str, verb: &str) -> Result<u64, String> {
    arg.parse()
        .map_err(|_| format!("Usage: {verb} <id>"))
}

/// Rendering policy: while loading only the indicator; while errored only
/// the message; otherwise the form, the employee list and, when an employee
/// is selected, the attendance panel.
pub fn render(state: &ViewState) -> String {
    if state.loading {
        return "Loading...\n".to_string();
    }
    if let Some(error) = &state.error {
        return format!("Error: {error}\n");
    }

    let mut out = String::new();
    if let Some(notice) = &state.notice {
        let _ = writeln!(out, "[!] {notice}\n");
    }

    let _ = writeln!(out, "HRMS Lite\n");

    let _ = writeln!(out, "Add employee (set <field> <value>, then 'add'):");
    let form = &state.form;
    let _ = writeln!(out, "  employee_id: {}", form.employee_id);
    let _ = writeln!(out, "  full_name:   {}", form.full_name);
    let _ = writeln!(out, "  email:       {}", form.email);
    let _ = writeln!(out, "  department:  {}\n", form.department);

    let _ = writeln!(out, "Employees:");
    if state.employees.is_empty() {
        let _ = writeln!(out, "  No employees yet.");
    } else {
        for emp in &state.employees {
            let _ = writeln!(
                out,
                "  [{}] {} ({}) - {}",
                emp.id, emp.full_name, emp.department, emp.email
            );
        }
    }

    if let Some(selected) = &state.selected {
        let _ = writeln!(out, "\nAttendance for {} (present | absent):", selected.full_name);
        if state.attendance.is_empty() {
            let _ = writeln!(out, "  No records yet.");
        } else {
            for record in &state.attendance {
                let _ = writeln!(out, "  {} - {}", record.date, record.status);
            }
        }
    }

    out
}

/// Interactive loop. Sequential by construction: each command's controller
/// action runs to completion before the next line is read, so at most one
/// request is in flight at any time.
pub async fn run<C: HrApi>(mut app: App<C>) -> anyhow::Result<()> {
    println!("Loading...");
    app.load_employees().await;
    print_view(&app.state)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                println!("{HELP}");
                prompt()?;
                continue;
            }
            Ok(command) => dispatch(&mut app, command).await,
            Err(message) => {
                println!("{message}");
                prompt()?;
                continue;
            }
        }
        print_view(&app.state)?;
    }
    Ok(())
}

async fn dispatch<C: HrApi>(app: &mut App<C>, command: Command) {
    match command {
        Command::Set(field, value) => app.set_form_field(field, &value),
        Command::Add => app.submit_new_employee().await,
        Command::Delete(id) => app.delete_employee(id).await,
        Command::View(id) => app.select_employee(id).await,
        Command::Mark(status) => app.mark_attendance(status).await,
        Command::Refresh => app.load_employees().await,
        Command::Help | Command::Quit => {}
    }
}

fn print_view(state: &ViewState) -> std::io::Result<()> {
    print!("{}", render(state));
    prompt()
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}
