use miette::{bail, Result};

use crate::{
    dial::{self, Simulation},
    parser::Parser,
    reader,
};

pub fn run_file(file_path: &str) -> Result<Simulation> {
    let code = match reader::read_instructions(file_path) {
        Ok(code) => code,
        Err(error) => bail!(error),
    };
    run(&code)
}

pub fn run(code: &str) -> Result<Simulation> {
    let result = Parser::new(code).parse();
    tracing::debug!(
        "parsed {} instructions, skipped {} malformed lines",
        result.instructions.len(),
        result.errors.len()
    );
    for instruction in &result.instructions {
        tracing::debug!("instruction: {instruction}");
    }

    let simulation = match dial::simulate(&result.instructions) {
        Ok(simulation) => simulation,
        Err(e) => bail!("Failed to simulate instructions: {e}"),
    };

    tracing::debug!(
        "dial stopped at {} after {} steps",
        simulation.position,
        simulation.steps
    );

    Ok(simulation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::DEFAULT_INSTRUCTIONS_PATH;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn bundled_instructions() {
        let simulation = run_file(DEFAULT_INSTRUCTIONS_PATH).unwrap();
        assert_eq!(simulation.hits, 3);
        assert_eq!(simulation.steps, 10);
    }

    #[test]
    fn skips_malformed_lines() {
        let simulation = run("R50\nnonsense\nL\n\nR100").unwrap();
        assert_eq!(simulation.hits, 2);
        assert_eq!(simulation.steps, 2);
    }

    #[test]
    fn nothing_to_simulate() {
        let error = run("garbage\n\n").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Failed to simulate instructions: no instructions to simulate"
        );
    }

    #[test]
    fn unreadable_file() {
        assert!(run_file("").is_err());

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        assert!(run_file(missing.to_str().unwrap()).is_err());
    }

    #[test]
    fn from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"L50\nR50\n").unwrap();
        file.flush().unwrap();

        let simulation = run_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(simulation.hits, 1);
        assert_eq!(simulation.position, 50);
    }
}
