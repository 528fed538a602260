use std::{io::Write, process::ExitCode};

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use env_logger::Builder;
use pcb_model::{
    Policy, Report, Result, SchedEvent, Sim, SimError,
    core::{
        Ticks,
        input::{parse_bursts, parse_quantum},
    },
    sim::random_bursts,
};

fn main() -> ExitCode {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let matches = cli().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

fn cli() -> Command {
    let bursts = Arg::new("bursts")
        .num_args(0..)
        .allow_negative_numbers(true)
        .help("CPU burst time of each process, in arrival order");

    Command::new("pcb_model")
        .about("FCFS and Round-Robin CPU scheduling simulator")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("trace")
                .long("trace")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print every dispatch and completion"),
        )
        .arg(
            Arg::new("random")
                .long("random")
                .global(true)
                .value_parser(value_parser!(usize))
                .help("Generate this many random bursts instead of reading them"),
        )
        .arg(
            Arg::new("max-burst")
                .long("max-burst")
                .global(true)
                .default_value("10")
                .value_parser(value_parser!(u64))
                .help("Upper bound for generated bursts"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .global(true)
                .default_value("0")
                .value_parser(value_parser!(u64))
                .help("Seed for generated bursts"),
        )
        .subcommand(
            Command::new("fcfs")
                .about("First-Come-First-Served")
                .arg(bursts.clone()),
        )
        .subcommand(
            Command::new("rr")
                .about("Round-Robin with a fixed quantum")
                .arg(
                    Arg::new("quantum")
                        .required(true)
                        .allow_negative_numbers(true)
                        .help("Time slice granted per dispatch"),
                )
                .arg(bursts),
        )
}

fn run(matches: &ArgMatches) -> Result<()> {
    let (policy, sub) = match matches.subcommand() {
        Some(("fcfs", sub)) => (Policy::Fcfs, sub),
        Some(("rr", sub)) => {
            let token = sub
                .get_one::<String>("quantum")
                .ok_or_else(|| SimError::InvalidInput("missing quantum".to_owned()))?;
            let quantum = parse_quantum(token)?;
            (Policy::RoundRobin { quantum }, sub)
        }
        _ => return Err(SimError::InvalidInput("unknown algorithm".to_owned())),
    };

    let bursts = read_bursts(sub)?;
    let sim = Sim::new(&bursts, policy)?;

    println!("Using {policy}");
    for record in sim.table().records() {
        println!("Accepted P{}: Burst {}", record.id, record.burst);
    }

    let outcome = sim.run();
    if sub.get_flag("trace") {
        print_trace(&outcome.events);
    }
    println!("{}", Report::new(&outcome));

    Ok(())
}

fn read_bursts(sub: &ArgMatches) -> Result<Vec<Ticks>> {
    let tokens: Vec<&String> = sub
        .get_many::<String>("bursts")
        .map(|values| values.collect())
        .unwrap_or_default();

    match sub.get_one::<usize>("random") {
        Some(_) if !tokens.is_empty() => Err(SimError::InvalidInput(
            "--random cannot be combined with explicit bursts".to_owned(),
        )),
        Some(&count) => {
            let max_burst = *sub.get_one::<u64>("max-burst").unwrap_or(&10);
            let seed = *sub.get_one::<u64>("seed").unwrap_or(&0);
            Ok(random_bursts(count, max_burst, seed))
        }
        None => parse_bursts(&tokens),
    }
}

fn print_trace(events: &[SchedEvent]) {
    for event in events {
        println!("t={} {:?}", event.at(), event);
    }
}
