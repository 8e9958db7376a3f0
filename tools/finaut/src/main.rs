#![forbid(unsafe_code)]

//! A command line demo driver for the automaton engine. The engine itself
//! has no file format or protocol surface, so the driver operates on
//! built-in example machines.

use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;

use finaut_automata::Acceptor;
use finaut_automata::Nfa;
use finaut_automata::NfaLambda;
use finaut_automata::StateIndex;
use finaut_conversion::determinize;
use finaut_conversion::eliminate_silent;
use finaut_conversion::minimize;
use finaut_conversion::words_up_to;
use finaut_regexp::RegularExpression;

#[derive(clap::Parser, Debug)]
#[command(
    about = "A command line demo for the finaut automaton engine",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

/// Defines the subcommands for this tool.
#[derive(Debug, Subcommand)]
enum Commands {
    Enumerate(EnumerateArgs),
    Pipeline(PipelineArgs),
    Render,
}

#[derive(clap::Args, Debug)]
#[command(about = "Prints the accepted words of an example machine, shortest first")]
struct EnumerateArgs {
    machine: Machine,

    #[arg(long, default_value_t = 5, help = "Maximum word length to enumerate")]
    max_length: usize,
}

#[derive(clap::Args, Debug)]
#[command(about = "Runs an example machine through the conversion pipeline down to a minimal DFA")]
struct PipelineArgs {
    machine: Machine,
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
enum Machine {
    /// Words over {0,1} that contain "00" or "11".
    DoubleSymbol,
    /// Words of the form 0*1*2*, built with silent transitions.
    OrderedDigits,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match cli.commands {
        Commands::Enumerate(args) => enumerate(&args),
        Commands::Pipeline(args) => pipeline(&args),
        Commands::Render => render(),
    }

    ExitCode::SUCCESS
}

fn enumerate(args: &EnumerateArgs) {
    let (acceptor, alphabet) = example_acceptor(args.machine);

    println!("Accepted words up to length {}:", args.max_length);
    for word in words_up_to(&alphabet, args.max_length) {
        if acceptor.accepts(&word) {
            if word.is_empty() {
                println!("λ");
            } else {
                println!("{}", word.iter().collect::<String>());
            }
        }
    }
}

fn pipeline(args: &PipelineArgs) {
    let nfa = match args.machine {
        Machine::DoubleSymbol => double_symbol_nfa(),
        Machine::OrderedDigits => {
            let nfa_lambda = ordered_digits_nfa_lambda();
            println!("NFA-λ: {} states", nfa_lambda.num_of_states());
            eliminate_silent(&nfa_lambda)
        }
    };
    println!("NFA: {} states", nfa.num_of_states());

    let dfa = determinize(&nfa);
    println!("DFA: {} states, {} transitions", dfa.num_of_states(), dfa.num_of_transitions());

    let minimal = minimize(&dfa);
    println!(
        "minimal DFA: {} states, {} transitions",
        minimal.num_of_states(),
        minimal.num_of_transitions()
    );
}

fn render() {
    // ab then zero or more repetitions of 0 or (ab|c)1.
    let ab = RegularExpression::symbol('a').concatenate(RegularExpression::symbol('b'));
    let tail = RegularExpression::symbol('0')
        .or(ab.clone().or(RegularExpression::symbol('c')).concatenate(RegularExpression::symbol('1')))
        .star();

    println!("{}", ab.concatenate(tail));
}

fn example_acceptor(machine: Machine) -> (Box<dyn Acceptor<char>>, Vec<char>) {
    match machine {
        Machine::DoubleSymbol => (Box::new(double_symbol_nfa()), vec!['0', '1']),
        Machine::OrderedDigits => (Box::new(ordered_digits_nfa_lambda()), vec!['0', '1', '2']),
    }
}

/// The automaton accepting words over {0,1} that contain "00" or "11".
fn double_symbol_nfa() -> Nfa<char> {
    let state = StateIndex::new;

    Nfa::new(
        4,
        [
            (state(0), '0', state(0)),
            (state(0), '0', state(1)),
            (state(0), '1', state(0)),
            (state(0), '1', state(2)),
            (state(1), '0', state(3)),
            (state(2), '1', state(3)),
            (state(3), '0', state(3)),
            (state(3), '1', state(3)),
        ],
        state(0),
        [state(3)],
    )
    .expect("the example machine is well-formed")
}

/// The automaton recognising 0*1*2* through silent edges between the phases.
fn ordered_digits_nfa_lambda() -> NfaLambda<char> {
    let state = StateIndex::new;

    NfaLambda::new(
        3,
        [
            (state(0), Some('0'), state(0)),
            (state(0), None, state(1)),
            (state(1), Some('1'), state(1)),
            (state(1), None, state(2)),
            (state(2), Some('2'), state(2)),
        ],
        state(0),
        [state(2)],
    )
    .expect("the example machine is well-formed")
}
