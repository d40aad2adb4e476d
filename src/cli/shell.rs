use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

use crate::{
    backend::HttpBackend,
    checklist::{ChecklistController, ToggleOutcome},
    info, success, warning,
};

use super::{
    load,
    open::{open_link, report},
    session,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    List,
    Groups,
    Filter(String),
    Toggle(usize),
    Open(usize),
    Reload,
    Nickname(Option<String>),
    Reset,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(line: &str) -> ShellCommand {
    let line = line.trim();
    let (cmd, arg) = match line.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (line, ""),
    };

    let index = || arg.parse::<usize>().ok();

    match cmd.to_lowercase().as_str() {
        "" => ShellCommand::Empty,
        "list" | "ls" => ShellCommand::List,
        "groups" => ShellCommand::Groups,
        "filter" | "f" => ShellCommand::Filter(arg.to_string()),
        "toggle" | "t" => match index() {
            Some(i) => ShellCommand::Toggle(i),
            None => ShellCommand::Unknown(line.to_string()),
        },
        "open" | "o" => match index() {
            Some(i) => ShellCommand::Open(i),
            None => ShellCommand::Unknown(line.to_string()),
        },
        "reload" | "r" => ShellCommand::Reload,
        "nickname" => ShellCommand::Nickname(Some(arg.to_string()).filter(|a| !a.is_empty())),
        "reset" => ShellCommand::Reset,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        _ => ShellCommand::Unknown(line.to_string()),
    }
}

fn print_help() {
    info!("Commands:");
    println!("  list               show the checklist");
    println!("  groups             show the group filter options");
    println!("  filter <group|all> show one group or all of them");
    println!("  toggle <n>         check or uncheck item n");
    println!("  open <n>           open the Swagger docs of item n");
    println!("  reload             fetch the checklist again");
    println!("  nickname [name]    show or change your nickname");
    println!("  reset              forget your nickname");
    println!("  quit               leave the shell");
}

fn prompt(label: &str) {
    print!("{}", label);
    let _ = std::io::stdout().flush();
}

/// Keeps asking until a non-blank nickname is stored. `false` on end of input.
async fn ask_nickname<R>(
    controller: &mut ChecklistController<HttpBackend>,
    lines: &mut Lines<R>,
) -> bool
where
    R: AsyncBufRead + Unpin,
{
    info!("Please choose a nickname. It is attached to every API you check.");
    loop {
        prompt("Nickname: ");
        let Ok(Some(line)) = lines.next_line().await else {
            return false;
        };

        if let Ok(nickname) = controller.submit_nickname(&line).await {
            success!("Welcome, {}!", nickname);
            return true;
        }
    }
}

/// Interactive session over one checklist.
///
/// When nickname tracking is on and no nickname is stored, the session
/// starts by asking for one and does not continue until it gets it.
pub async fn shell() {
    let mut controller = session().await;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if controller.needs_identity() && !ask_nickname(&mut controller, &mut lines).await {
        return;
    }

    if load(&mut controller).await {
        print!("{}", controller.rendered());
    }
    print_help();

    loop {
        prompt("> ");
        let Ok(Some(line)) = lines.next_line().await else {
            break;
        };

        match parse_command(&line) {
            ShellCommand::Empty => {}
            ShellCommand::Quit => break,
            ShellCommand::Help => print_help(),
            ShellCommand::List => print!("{}", controller.rendered()),
            ShellCommand::Groups => {
                for option in controller.filter().options() {
                    println!("  {}", option);
                }
            }
            ShellCommand::Filter(group) => {
                if controller.select_group(&group) {
                    print!("{}", controller.rendered());
                } else {
                    warning!("Unknown group {}.", group);
                }
            }
            ShellCommand::Toggle(index) => match controller.toggle_index(index).await {
                Ok(ToggleOutcome::Rejected) => {
                    if !ask_nickname(&mut controller, &mut lines).await {
                        break;
                    }
                }
                Ok(_) => print!("{}", controller.rendered()),
                Err(e) => warning!("{}", e),
            },
            ShellCommand::Open(index) => match controller.entry(index) {
                Some(entry) => report(open_link(controller.backend().base_url(), &entry.link)),
                None => warning!("No item #{}.", index),
            },
            ShellCommand::Reload => {
                if load(&mut controller).await {
                    print!("{}", controller.rendered());
                }
            }
            ShellCommand::Nickname(None) => match controller.nickname() {
                Some(n) => info!("Nickname: {}", n),
                None => warning!("No nickname set."),
            },
            ShellCommand::Nickname(Some(name)) => {
                if let Ok(n) = controller.submit_nickname(&name).await {
                    success!("Nickname set to {}.", n);
                }
            }
            ShellCommand::Reset => {
                if let Err(e) = controller.reset_identity().await {
                    warning!("Cannot clear nickname. Err: {}", e);
                    continue;
                }
                success!("Nickname cleared.");
                if controller.needs_identity() && !ask_nickname(&mut controller, &mut lines).await {
                    break;
                }
            }
            ShellCommand::Unknown(input) => warning!("Unknown command: {}. Type help.", input),
        }
    }
}
