use clap::Subcommand;
use colored::Colorize;
use hospitals_lib::{ApiError, Hospital, HospitalApi, HospitalId, Outcome, Screen};
use sysexits::ExitCode;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List hospitals
    List,
    /// Add a new hospital
    Add { name: String, address: String },
    /// Edit an existing hospital
    Edit {
        id: u64,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New address
        #[arg(short, long)]
        address: Option<String>,
    },
    /// Delete a hospital
    Delete { id: u64 },
}

pub async fn handle<A: HospitalApi>(mut screen: Screen<A>, cmd: &Command) -> ExitCode {
    match run(&mut screen, cmd).await {
        Ok(()) => ExitCode::Ok,
        Err(code) => code,
    }
}

async fn run<A: HospitalApi>(screen: &mut Screen<A>, cmd: &Command) -> Result<(), ExitCode> {
    match cmd {
        Command::List => {
            let outcome = screen.load().await;
            apply(screen, outcome)?;
            print_table(screen.store().records());
        }
        Command::Add { name, address } => {
            screen.form_mut().set_name(name.as_str());
            screen.form_mut().set_address(address.as_str());
            require_valid(screen)?;

            let outcome = screen.submit().await;
            apply(screen, outcome)?;
            print_table(screen.store().records());
        }
        Command::Edit { id, name, address } => {
            let id = HospitalId::new(*id);

            let outcome = screen.load().await;
            apply(screen, outcome)?;
            let Some(hospital) = screen.store().get(id).cloned() else {
                eprintln!("{} no hospital with id {id}", "error:".red().bold());
                return Err(ExitCode::DataErr);
            };

            screen.select_for_edit(&hospital);
            if let Some(name) = name {
                screen.form_mut().set_name(name.as_str());
            }
            if let Some(address) = address {
                screen.form_mut().set_address(address.as_str());
            }
            require_valid(screen)?;

            let outcome = screen.submit().await;
            apply(screen, outcome)?;
            if let Some(updated) = screen.store().get(id) {
                print_table(std::slice::from_ref(updated));
            }
        }
        Command::Delete { id } => {
            let id = HospitalId::new(*id);

            let outcome = screen.delete(id).await;
            apply(screen, outcome)?;
            println!("Deleted hospital {id}");
        }
    }

    Ok(())
}

fn apply<A: HospitalApi>(screen: &mut Screen<A>, outcome: Outcome) -> Result<(), ExitCode> {
    screen.apply(outcome).map_err(|err: ApiError| {
        eprintln!("{} {err}", "error:".red().bold());
        ExitCode::Unavailable
    })
}

fn require_valid<A: HospitalApi>(screen: &Screen<A>) -> Result<(), ExitCode> {
    if screen.form().is_valid() {
        Ok(())
    } else {
        eprintln!("{} name and address are required", "error:".red().bold());
        Err(ExitCode::Usage)
    }
}

fn print_table(hospitals: &[Hospital]) {
    if hospitals.is_empty() {
        println!("No hospitals");
        return;
    }

    let id_width = column_width("ID", hospitals.iter().map(|h| h.id.to_string()));
    let name_width = column_width("NAME", hospitals.iter().map(|h| h.name.clone()));

    println!(
        "{:<id_width$}  {:<name_width$}  {}",
        "ID".bold(),
        "NAME".bold(),
        "ADDRESS".bold()
    );
    for hospital in hospitals {
        println!(
            "{:<id_width$}  {:<name_width$}  {}",
            hospital.id.to_string().cyan(),
            hospital.name,
            hospital.address
        );
    }
}

fn column_width(header: &str, values: impl Iterator<Item = String>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain([header.len()])
        .max()
        .unwrap_or_default()
}
