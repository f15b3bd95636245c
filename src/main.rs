//! Poseidon2 CLI.
//!
//! Thin host around the library: hashes, traces and merkle roots over
//! decimal or `0x` hex field elements.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use group::ff::Field;
use poseidon2::config::ParamsFile;
use poseidon2::{
    parse_element, to_decimal, to_hex, to_repr_hex, Fr, MerkleTree, Params, Poseidon2, Result,
    RoundKind, State, WIDTH,
};

#[derive(Parser)]
#[command(name = "poseidon2")]
#[command(about = "Poseidon2 hash over BN254 scalar field elements", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON parameter file replacing the built in constants
    #[arg(long, global = true)]
    params: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash three field elements
    Hash {
        #[arg(num_args = WIDTH, required = true)]
        inputs: Vec<String>,

        #[arg(long, value_enum, default_value_t = Format::Decimal)]
        format: Format,
    },

    /// Print the state after every round of the permutation
    Trace {
        #[arg(num_args = WIDTH, required = true)]
        inputs: Vec<String>,
    },

    /// Print the active parameter set as JSON
    Params,

    /// Merkle root over the given leaves
    MerkleRoot {
        #[arg(required = true)]
        leaves: Vec<String>,

        #[arg(long, value_enum, default_value_t = Format::Decimal)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Decimal,
    Hex,
    /// Little endian canonical encoding
    Repr,
}

fn render(fe: Fr, format: Format) -> String {
    match format {
        Format::Decimal => to_decimal(fe),
        Format::Hex => to_hex(fe),
        Format::Repr => to_repr_hex(fe),
    }
}

fn parse_inputs(inputs: &[String]) -> Result<[Fr; WIDTH]> {
    let mut elements = [Fr::ZERO; WIDTH];
    for (element, input) in elements.iter_mut().zip(inputs) {
        *element = parse_element(input)?;
    }
    Ok(elements)
}

fn hasher(params: Option<&PathBuf>) -> Result<Poseidon2<Fr>> {
    let params = match params {
        Some(path) => ParamsFile::load(path)?.into_params()?,
        None => Params::standard(),
    };
    Ok(Poseidon2::new(params))
}

fn run(cli: Cli) -> Result<()> {
    let hasher = hasher(cli.params.as_ref())?;

    match cli.command {
        Commands::Hash { inputs, format } => {
            let digest = hasher.hash(&parse_inputs(&inputs)?);
            println!("{}", render(digest, format));
        }
        Commands::Trace { inputs } => {
            let mut state = State::new(parse_inputs(&inputs)?);
            let trace = hasher.params().permute_with_trace(&mut state);
            for (round, (kind, state)) in trace.iter().enumerate() {
                let kind = match kind {
                    RoundKind::Full => "full",
                    RoundKind::Partial => "partial",
                };
                let words: Vec<String> = state.words().iter().map(|w| to_hex(*w)).collect();
                println!("{:>2} {:<7} {}", round, kind, words.join(" "));
            }
            println!("output {}", to_decimal(state.result()));
        }
        Commands::Params => {
            println!("{}", ParamsFile::from_params(hasher.params()).to_json()?);
        }
        Commands::MerkleRoot { leaves, format } => {
            let leaves = leaves
                .iter()
                .map(|leaf| parse_element(leaf))
                .collect::<Result<Vec<Fr>>>()?;
            let tree = MerkleTree::new(&hasher, &leaves)?;
            println!("{}", render(tree.root(), format));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
