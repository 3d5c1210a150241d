use std::fs;
use std::io::Write;
use std::path::Path as FsPath;

use anyhow::{bail, Context};
use colored::Colorize;
use mrec_path::Path;
use mrec_record::{Record, Value};
use tracing::debug;

use crate::cli::*;

pub fn run_command(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let overrides = cli
        .overrides
        .iter()
        .map(|raw| parse_override(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;

    match cli.command {
        Command::Merge(args) => {
            let record = load_layers(&args.files, &overrides, cli.verbose)?;
            write_json(out, &record, args.pretty)
        }
        Command::Get(args) => {
            let record = load_layers(&args.files, &overrides, cli.verbose)?;
            let fallback = args.default.as_deref().map(parse_value);
            match record.get(&args.path).or(fallback.as_ref()) {
                Some(value) => write_json(out, value, args.pretty),
                None => bail!("path not found: {}", args.path),
            }
        }
        Command::Keys(args) => {
            let record = load_layers(&args.files, &overrides, cli.verbose)?;
            for key in &record {
                writeln!(out, "{key}")?;
            }
            Ok(())
        }
    }
}

/// Merge every file in order, then apply the `--set` overrides.
fn load_layers(
    files: &[std::path::PathBuf],
    overrides: &[(Path, Value)],
    verbose: bool,
) -> anyhow::Result<Record> {
    let layers = files
        .iter()
        .map(|file| load_document(file))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let mut record = Record::from_sources(&layers);

    for (path, value) in overrides {
        record.set(&path.to_string(), value.clone());
    }
    debug!(
        layers = layers.len(),
        overrides = overrides.len(),
        keys = record.len(),
        "layers merged"
    );
    if verbose {
        eprintln!(
            "{} merged {} layer(s), {} override(s)",
            "✓".green().bold(),
            layers.len(),
            overrides.len()
        );
    }
    Ok(record)
}

/// Read a JSON or TOML document. The format follows the file extension.
fn load_document(file: &FsPath) -> anyhow::Result<Value> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("cannot read {}", file.display()))?;
    let is_toml = file
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let value = if is_toml {
        let table: toml::Table = toml::from_str(&text)
            .with_context(|| format!("invalid TOML in {}", file.display()))?;
        Value::from(toml::Value::Table(table))
    } else {
        let json: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("invalid JSON in {}", file.display()))?;
        Value::from(json)
    };

    if !value.is_object() {
        bail!(
            "{}: expected an object document, got {}",
            file.display(),
            value.kind()
        );
    }
    debug!(file = %file.display(), toml = is_toml, "document loaded");
    Ok(value)
}

/// Parse `PATH=VALUE`.
fn parse_override(raw: &str) -> anyhow::Result<(Path, Value)> {
    let Some((path, value)) = raw.split_once('=') else {
        bail!("override must look like PATH=VALUE: {raw:?}");
    };
    let path = Path::try_parse(path).with_context(|| format!("invalid override path in {raw:?}"))?;
    Ok((path, parse_value(value)))
}

/// JSON when it parses, a plain string otherwise.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(raw))
}

fn write_json(out: &mut impl Write, value: &impl serde::Serialize, pretty: bool) -> anyhow::Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(out, "{text}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn run(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("mrec").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run_command(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn layers(dir: &TempDir) -> (String, String) {
        let base = write(
            dir,
            "base.toml",
            "name = \"svc\"\n_internal = 1\n[server]\nport = 80\nhost = \"localhost\"\n",
        );
        let overlay = write(dir, "prod.json", r#"{"server": {"port": 443}, "debug": false}"#);
        (
            base.to_string_lossy().into_owned(),
            overlay.to_string_lossy().into_owned(),
        )
    }

    #[test]
    fn merge_layers_left_to_right() {
        let dir = TempDir::new().unwrap();
        let (base, overlay) = layers(&dir);
        let output = run(&["merge", &base, &overlay]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "svc",
                "server": {"port": 443, "host": "localhost"},
                "debug": false
            })
        );
    }

    #[test]
    fn get_reads_dotted_path() {
        let dir = TempDir::new().unwrap();
        let (base, overlay) = layers(&dir);
        assert_eq!(run(&["get", "server.port", &base, &overlay]).unwrap(), "443\n");
        assert_eq!(run(&["get", "server.host", &base]).unwrap(), "\"localhost\"\n");
    }

    #[test]
    fn get_missing_path_fails_unless_defaulted() {
        let dir = TempDir::new().unwrap();
        let (base, _) = layers(&dir);
        assert!(run(&["get", "server.tls", &base]).is_err());
        assert_eq!(
            run(&["get", "server.tls", &base, "--default", "off"]).unwrap(),
            "\"off\"\n"
        );
    }

    #[test]
    fn overrides_apply_after_merge() {
        let dir = TempDir::new().unwrap();
        let (base, overlay) = layers(&dir);
        let output = run(&[
            "get",
            "server",
            &base,
            &overlay,
            "--set",
            "server.port=8443",
            "--set",
            "server.tls.mode=strict",
        ])
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"port": 8443, "host": "localhost", "tls": {"mode": "strict"}})
        );
    }

    #[test]
    fn keys_lists_public_top_level_keys() {
        let dir = TempDir::new().unwrap();
        let (base, overlay) = layers(&dir);
        assert_eq!(
            run(&["keys", &base, &overlay]).unwrap(),
            "name\nserver\ndebug\n"
        );
    }

    #[test]
    fn rejects_non_object_documents() {
        let dir = TempDir::new().unwrap();
        let list = write(&dir, "list.json", "[1, 2]");
        let err = run(&["merge", &list.to_string_lossy()]).unwrap_err();
        assert!(err.to_string().contains("expected an object document"));
    }

    #[test]
    fn rejects_malformed_override() {
        let dir = TempDir::new().unwrap();
        let (base, _) = layers(&dir);
        assert!(run(&["merge", &base, "--set", "novalue"]).is_err());
        assert!(run(&["merge", &base, "--set", "a..b=1"]).is_err());
    }

    #[test]
    fn parse_value_falls_back_to_string() {
        assert_eq!(parse_value("12"), Value::from(12));
        assert_eq!(parse_value("[1]"), Value::from(vec![1]));
        assert_eq!(parse_value("plain"), Value::from("plain"));
    }
}
