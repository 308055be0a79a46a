use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tf_outputs_core::{parse_outputs, read_outputs, write_github_lines, OutputSet};
use tracing::{debug, info};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "tf-outputs", version, about = "将 terraform 输出转换为 GitHub Actions 日志命令")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 读取 `terraform output -json` 的结果并输出 set-output / add-mask 命令
    Convert {
        /// 输入文件；"-" 表示标准输入
        #[arg(long, default_value = "-", conflicts_with = "from_env")]
        input: PathBuf,

        /// 从指定环境变量读取 JSON 文本
        #[arg(long, value_name = "VAR")]
        from_env: Option<String>,

        /// 输出文件；缺省写到标准输出
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // 日志写到 stderr，stdout 专用于协议行
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { input, from_env, output } => {
            let outputs = load_outputs(&input, from_env.as_deref())?;
            info!(outputs = outputs.len(), "converting outputs");
            for (name, desc) in &outputs {
                debug!(%name, sensitive = desc.sensitive, "output");
            }

            let mut out: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(File::create(path).context("create output file")?)),
                None => Box::new(io::stdout().lock()),
            };
            let stats = write_github_lines(&outputs, &mut out).context("write protocol lines")?;
            out.flush().context("flush output")?;

            info!(outputs_written = stats.outputs_written, masks_written = stats.masks_written, "conversion finished");
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 按来源读取输出集合：环境变量优先，其次文件 / 标准输入
fn load_outputs(input: &Path, from_env: Option<&str>) -> Result<OutputSet> {
    if let Some(var) = from_env {
        let text = std::env::var(var).with_context(|| format!("read environment variable {var}"))?;
        return parse_outputs(&text).with_context(|| format!("parse outputs from {var}"));
    }
    if input.as_os_str() == "-" {
        return read_outputs(io::stdin().lock()).context("parse outputs from stdin");
    }
    let file = File::open(input).with_context(|| format!("open input file {}", input.display()))?;
    read_outputs(file).with_context(|| format!("parse outputs from {}", input.display()))
}
