use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_COMBINATIONS_PATH: &str = "data/horarios.json";
pub const DEFAULT_OUTPUT_PATH: &str = "horario.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// `schedule-grid web [port]`
    Web { bind_address: String, port: u16 },
    /// `schedule-grid [combinations.json] [output.txt]`
    Cli { combinations_path: String, output_path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
}

impl Config {
    pub fn from_env_and_args() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        Self::from_parts(&args, |key| env::var(key).ok())
    }

    /// Arguments win over environment variables, which win over defaults
    pub fn from_parts<F>(args: &[String], var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if args.first().map(String::as_str) == Some("web") {
            let parse_port = |p: &str| p.parse::<u16>().ok();
            let port = args
                .get(1)
                .and_then(|p| parse_port(p.as_str()))
                .or_else(|| var("PORT").and_then(|p| parse_port(p.as_str())))
                .unwrap_or(DEFAULT_PORT);
            let bind_address = var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
            return Config { mode: Mode::Web { bind_address, port } };
        }

        let combinations_path = args
            .first()
            .cloned()
            .or_else(|| var("COMBINATIONS_PATH"))
            .unwrap_or_else(|| DEFAULT_COMBINATIONS_PATH.to_string());
        let output_path = args
            .get(1)
            .cloned()
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

        Config { mode: Mode::Cli { combinations_path, output_path } }
    }
}
