use clap::Parser;
use neutro_defect::{cli, config, display, error, export, extractor, inspect, table};
use cli::{Cli, Commands};
use config::Config;
use display::DisplayCache;
use error::Result;
use neutro_defect_common::report::format_value;
use neutro_defect_common::classify_record;
use table::FeatureTable;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let features_path = cli.features.clone().unwrap_or_else(|| config.features_csv.clone());

    match cli.command {
        Commands::Extract { dataset, output, sequential } => {
            println!("🔍 neutro-defect - 特徴量抽出\n");

            let root = dataset.unwrap_or_else(|| config.dataset_root.clone());
            let output = output.unwrap_or(features_path);
            let options = extractor::BatchOptions {
                parallel: config.parallel && !sequential,
                show_progress: true,
            };

            println!("[1/2] データセットを処理中: {}", root.display());
            let outcome = extractor::extract_dataset(&root, options);
            for missing in &outcome.missing {
                println!("❌ {}", missing);
            }
            println!(
                "✔ {}件を抽出（読み込み不可 {}件をスキップ）\n",
                outcome.records.len(),
                outcome.skipped.len()
            );
            if cli.verbose {
                for path in &outcome.skipped {
                    println!("  スキップ: {}", path.display());
                }
            }

            println!("[2/2] 結果を保存中...");
            table::write_records(&outcome.records, &output)?;
            println!("✔ 結果を保存: {}", output.display());

            println!("\n✅ 抽出完了");
        }

        Commands::Dashboard { json } => {
            let table = FeatureTable::load(&features_path)?;
            let stats = table.stats();

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("📊 ダッシュボード");
                println!("  総数: {}", stats.total);
                println!("  defect: {}", stats.defect);
                println!("  normal: {}", stats.normal);
                println!("  平均 Truth: {}", format_value(stats.avg_truth));
                println!("  平均 Indeterminacy: {}", format_value(stats.avg_indeterminacy));
                println!("  平均 Falsity: {}", format_value(stats.avg_falsity));
            }
        }

        Commands::List { label } => {
            let table = FeatureTable::load(&features_path)?;

            for record in table
                .records()
                .iter()
                .filter(|r| label.map_or(true, |l| r.label == l))
            {
                let class = classify_record(record);
                println!(
                    "{}\t{}\tT={}\tI={}\tF={}\t{}/{}",
                    record.name,
                    record.label,
                    format_value(record.truth),
                    format_value(record.indeterminacy),
                    format_value(record.falsity),
                    class.confidence,
                    class.severity,
                );
            }
        }

        Commands::Inspect { name, pick, json } => {
            let table = FeatureTable::load(&features_path)?;
            let cache = DisplayCache::new(&config.image_dir, &config.processed_dir);

            let name = if pick { Some(inspect::pick_image(&table)?) } else { name };
            let inspection = inspect::inspect(&table, &cache, name.as_deref())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&inspection)?);
            } else {
                println!("{}", inspect::render_text(&inspection));
            }
        }

        Commands::Report { name, output } => {
            println!("📄 neutro-defect - レポート生成\n");

            let table = FeatureTable::load(&features_path)?;
            let cache = DisplayCache::new(&config.image_dir, &config.processed_dir);
            let record = table.get(&name)?;

            let output = output.unwrap_or_else(|| config.report_dir.clone());
            export::export_report(record, &cache, &output, export::default_footer())?;

            println!("\n✅ レポート出力完了");
        }

        Commands::Export { output, title } => {
            println!("📄 neutro-defect - エクスポート\n");

            let table = FeatureTable::load(&features_path)?;
            let output = output.unwrap_or_else(|| config.report_dir.clone());
            export::export_table(&table, &output, &title)?;

            println!("\n✅ エクスポート完了");
        }

        Commands::Config { set_dataset, set_features, set_image_dir, show } => {
            let mut config = config;
            let changed = set_dataset.is_some() || set_features.is_some() || set_image_dir.is_some();

            if let Some(path) = set_dataset {
                config.dataset_root = path;
            }
            if let Some(path) = set_features {
                config.features_csv = path;
            }
            if let Some(path) = set_image_dir {
                config.image_dir = path;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  データセット: {}", config.dataset_root.display());
                println!("  特徴量テーブル: {}", config.features_csv.display());
                println!("  元画像フォルダ: {}", config.image_dir.display());
                println!("  加工画像フォルダ: {}", config.processed_dir.display());
                println!("  レポート出力先: {}", config.report_dir.display());
                println!("  並列処理: {}", if config.parallel { "有効" } else { "無効" });
            }
        }

        Commands::Cache { clear, info } => {
            let cache = DisplayCache::new(&config.image_dir, &config.processed_dir);

            if info || !clear {
                let stats = cache.info()?;
                println!("キャッシュ情報:");
                println!("  パス: {}", cache.cache_dir().display());
                println!("  件数: {}", stats.entries);
                println!("  サイズ: {} bytes", stats.bytes);
            }

            if clear {
                match cache.clear() {
                    Ok(true) => println!("✔ キャッシュを削除しました: {}", cache.cache_dir().display()),
                    Ok(false) => println!("キャッシュフォルダが存在しません"),
                    Err(e) => println!("キャッシュ削除エラー: {}", e),
                }
            }
        }
    }

    Ok(())
}
