//! docsight CLI - document analysis tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use docsight::render::{self, MarkdownRenderer};
use docsight::search::search_with_context;
use docsight::{
    detect, source, AnalysisOptions, AnalysisReport, Analyzer, AnalyzerConfig, Document,
    JsonFormat,
};

#[derive(Parser)]
#[command(name = "docsight")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Analyze documents: statistics, keywords, summaries, links, language and tables", long_about = None)]
struct Cli {
    /// Input file (analyzed with default options)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more documents
    Analyze {
        /// Input files (plain text, document JSON, or Docs JSON)
        #[arg(value_name = "FILE", required = true, num_args = 1..)]
        inputs: Vec<PathBuf>,

        #[command(flatten)]
        stages: StageArgs,

        /// Analysis options as JSON (e.g. '{"extractKeywords": true}')
        #[arg(long, value_name = "JSON", env = "DOCSIGHT_OPTIONS")]
        options: Option<String>,

        /// Analyzer configuration file (JSON)
        #[arg(long, value_name = "FILE", env = "DOCSIGHT_CONFIG")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Output file, or directory when several inputs are given
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Run analysis stages one after another
        #[arg(long)]
        sequential: bool,
    },

    /// Search a document for text
    Search {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Text to find (case-insensitive)
        #[arg(value_name = "QUERY")]
        query: String,

        /// Characters of context around each match
        #[arg(long, default_value = "50")]
        context: usize,
    },

    /// Show document information
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

/// Stage flags. Each one enables a stage on top of `--options`.
#[derive(Args, Default)]
struct StageArgs {
    /// Extract ranked keywords
    #[arg(short, long)]
    keywords: bool,

    /// Generate an extractive summary
    #[arg(short, long)]
    summary: bool,

    /// Extract links
    #[arg(short, long)]
    links: bool,

    /// Detect the document language
    #[arg(long)]
    language: bool,

    /// Extract tables
    #[arg(short, long)]
    tables: bool,

    /// Enable every stage
    #[arg(short, long)]
    all: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// JSON report
    Json,
    /// Human-readable Markdown report
    #[value(alias = "md")]
    Markdown,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Analyze {
            inputs,
            stages,
            options,
            config,
            format,
            compact,
            output,
            sequential,
        }) => run_analyze(
            &inputs,
            &stages,
            options.as_deref(),
            config.as_deref(),
            RenderSettings { format, compact },
            output.as_deref(),
            sequential,
        ),
        Some(Commands::Search {
            input,
            query,
            context,
        }) => cmd_search(&input, &query, context),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: analyze with default options if input is provided
            if let Some(input) = cli.input {
                let render = RenderSettings {
                    format: OutputFormat::Json,
                    compact: false,
                };
                cmd_analyze(
                    &[input],
                    AnalysisOptions::default(),
                    AnalyzerConfig::default(),
                    render,
                    None,
                )
            } else {
                println!("{}", "Usage: docsight <FILE>".yellow());
                println!("       docsight --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

#[derive(Clone, Copy)]
struct RenderSettings {
    format: OutputFormat,
    compact: bool,
}

fn build_options(stages: &StageArgs, json: Option<&str>) -> docsight::Result<AnalysisOptions> {
    let options = match json {
        Some(json) => AnalysisOptions::from_json(json)?,
        None => AnalysisOptions::default(),
    };
    if stages.all {
        return Ok(AnalysisOptions::all());
    }

    let options = options
        .with_keywords(options.extract_keywords || stages.keywords)
        .with_summary(options.summarize || stages.summary)
        .with_links(options.extract_links || stages.links)
        .with_language(options.detect_language || stages.language)
        .with_tables(options.extract_tables || stages.tables);
    Ok(options)
}

fn load_config(path: Option<&Path>, sequential: bool) -> docsight::Result<AnalyzerConfig> {
    let config = match path {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            AnalyzerConfig::from_json(&json)?
        }
        None => AnalyzerConfig::default(),
    };
    Ok(if sequential { config.sequential() } else { config })
}

fn read_document(path: &Path) -> docsight::Result<Document> {
    let data = fs::read(path)?;
    source::from_bytes(&data)
}

fn render_report(
    report: &AnalysisReport,
    doc: &Document,
    settings: RenderSettings,
) -> docsight::Result<String> {
    match settings.format {
        OutputFormat::Json => {
            let format = if settings.compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            render::to_json(report, format)
        }
        OutputFormat::Markdown => {
            let mut renderer = MarkdownRenderer::new();
            if let Some(title) = &doc.title {
                renderer = renderer.with_title(title.clone());
            }
            Ok(renderer.render(report))
        }
    }
}

fn output_path(dir: &Path, input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    dir.join(format!("{}.analysis.{}", stem, format.extension()))
}

fn run_analyze(
    inputs: &[PathBuf],
    stages: &StageArgs,
    options_json: Option<&str>,
    config_path: Option<&Path>,
    settings: RenderSettings,
    output: Option<&Path>,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = build_options(stages, options_json)?;
    let config = load_config(config_path, sequential)?;
    log::debug!("enabled stages: {}", options.enabled_names().join(","));
    cmd_analyze(inputs, options, config, settings, output)
}

fn cmd_analyze(
    inputs: &[PathBuf],
    options: AnalysisOptions,
    config: AnalyzerConfig,
    settings: RenderSettings,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = Analyzer::new(config)?;

    let analyze_one = |input: &PathBuf| -> docsight::Result<String> {
        let doc = read_document(input)?;
        let report = analyzer.analyze(&doc, &options);
        render_report(&report, &doc, settings)
    };

    if let [input] = inputs {
        let rendered = analyze_one(input)?;
        if let Some(path) = output {
            fs::write(path, &rendered)?;
            println!("{} {}", "Saved to".green(), path.display());
        } else {
            println!("{}", rendered);
        }
        return Ok(());
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message("Analyzing...");

    let results: Vec<(&PathBuf, docsight::Result<String>)> = inputs
        .par_iter()
        .map(|input| {
            let result = analyze_one(input);
            pb.inc(1);
            (input, result)
        })
        .collect();
    pb.finish_and_clear();

    if let Some(dir) = output {
        fs::create_dir_all(dir)?;
    }

    let mut failed = 0;
    for (input, result) in results {
        match result {
            Ok(rendered) => match output {
                Some(dir) => {
                    let path = output_path(dir, input, settings.format);
                    fs::write(&path, &rendered)?;
                    println!("{} {}", "Saved to".green(), path.display());
                }
                None => {
                    println!("{} {}", "==>".cyan().bold(), input.display());
                    println!("{}", rendered);
                }
            },
            Err(e) => {
                failed += 1;
                eprintln!("{} {}: {}", "Failed".red().bold(), input.display(), e);
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} files failed", failed, inputs.len()).into());
    }
    Ok(())
}

fn cmd_search(input: &Path, query: &str, context: usize) -> Result<(), Box<dyn std::error::Error>> {
    let doc = read_document(input)?;
    let matches = search_with_context(&doc.text, query, context);

    for m in &matches {
        let context = m.context.replace('\n', " ");
        println!("{} {}", format!("{:>8}:", m.position).dimmed(), context);
    }
    println!(
        "\n{} {} matches for \"{}\"",
        "Done!".green().bold(),
        matches.len(),
        query
    );

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let format = detect::detect_format_from_bytes(&data)?;
    let doc = source::from_bytes(&data)?;

    let options = AnalysisOptions::none()
        .with_word_count(true)
        .with_language(true)
        .with_tables(true);
    let report = Analyzer::default().analyze(&doc, &options);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    if let Some(ref title) = doc.title {
        println!("{}: {}", "Title".bold(), title);
    }
    println!("{}: {}", "Language".bold(), report.language);
    println!("{}: {}", "Elements".bold(), doc.elements.len());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let stats = &report.statistics;
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.character_count);
    println!("{}: {}", "Sentences".bold(), stats.sentence_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Headings".bold(), report.structure.headings.len());
    println!("{}: {}", "List items".bold(), report.structure.lists.len());
    println!("{}: {}", "Tables".bold(), report.tables.len());
    println!("{}: {} min", "Reading time".bold(), stats.reading_time);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docsight".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document analysis tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_build_options_flags() {
        let stages = StageArgs {
            keywords: true,
            links: true,
            ..StageArgs::default()
        };
        let options = build_options(&stages, None).unwrap();
        assert!(options.word_count);
        assert!(options.extract_keywords);
        assert!(options.extract_links);
        assert!(!options.summarize);
    }

    #[test]
    fn test_build_options_json_and_flags() {
        let stages = StageArgs {
            tables: true,
            ..StageArgs::default()
        };
        let options = build_options(&stages, Some(r#"{"summarize": true}"#)).unwrap();
        assert!(options.summarize);
        assert!(options.extract_tables);
    }

    #[test]
    fn test_build_options_rejects_unknown_key() {
        let result = build_options(&StageArgs::default(), Some(r#"{"translate": true}"#));
        assert!(matches!(result, Err(docsight::Error::InvalidOptions(_))));
    }

    #[test]
    fn test_load_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"maxKeywords": 3}}"#).unwrap();
        let config = load_config(Some(file.path()), true);
        // Config files use the struct's field names
        assert!(config.is_err());

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_keywords": 3}}"#).unwrap();
        let config = load_config(Some(file.path()), true).unwrap();
        assert_eq!(config.max_keywords, 3);
        assert!(!config.parallel);
    }

    #[test]
    fn test_read_document_formats() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Plain words here.").unwrap();
        let doc = read_document(file.path()).unwrap();
        assert!(doc.elements.is_empty());

        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"body": {{"content": [{{"paragraph": {{"elements": [{{"textRun": {{"content": "Hi\n"}}}}]}}}}]}}}}"#
        )
        .unwrap();
        let doc = read_document(file.path()).unwrap();
        assert_eq!(doc.elements.len(), 1);
    }

    #[test]
    fn test_read_document_missing_file() {
        let dir = tempdir().unwrap();
        let result = read_document(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(docsight::Error::Io(_))));
    }

    #[test]
    fn test_analyze_writes_outputs_for_each_input() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "First document. It is short.").unwrap();
        fs::write(&b, "Second document.").unwrap();
        let out = dir.path().join("out");

        let settings = RenderSettings {
            format: OutputFormat::Json,
            compact: true,
        };
        cmd_analyze(
            &[a.clone(), b],
            AnalysisOptions::default(),
            AnalyzerConfig::default(),
            settings,
            Some(&out),
        )
        .unwrap();

        let written = fs::read_to_string(output_path(&out, &a, OutputFormat::Json)).unwrap();
        let report = render::from_json(&written).unwrap();
        assert_eq!(report.statistics.word_count, 5);
        assert!(out.join("b.analysis.json").exists());
    }

    #[test]
    fn test_analyze_reports_failed_inputs() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.txt");
        fs::write(&good, "Fine.").unwrap();
        let bad = dir.path().join("bad.bin");
        fs::write(&bad, [0xFFu8, 0xFE, 0x00]).unwrap();

        let settings = RenderSettings {
            format: OutputFormat::Markdown,
            compact: false,
        };
        let result = cmd_analyze(
            &[good, bad],
            AnalysisOptions::default(),
            AnalyzerConfig::default(),
            settings,
            Some(dir.path()),
        );
        assert!(result.is_err());
        assert!(dir.path().join("good.analysis.md").exists());
    }
}
