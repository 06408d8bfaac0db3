use std::io::Read;
use std::sync::Arc;

use colored::Colorize;

use canopy_fsck::fsck;
use canopy_object::Object;
use canopy_store::{KvStore, LoggingStore, MemoryBackend, MemoryStore};
use canopy_sync::sync;

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Demo(args) => cmd_demo(args).await,
        Command::Hash(args) => cmd_hash(args),
    }
}

fn logging_store(id: &str, backend: MemoryBackend) -> Arc<dyn KvStore> {
    Arc::new(LoggingStore::new(Arc::new(MemoryStore::new(id, backend))))
}

/// Reproduce the classic pull scenario: two logical stores in one shared
/// namespace, a populated source, an empty destination.
async fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let backend = MemoryBackend::new();
    let s1 = logging_store("s1", backend.clone());
    let s2 = logging_store("s2", backend);

    let file1 = Object::leaf("Hello world!");
    let file2 = Object::leaf("Buy milk.");
    let sub_tree = Object::tree([
        ("hello-world.txt", file1.hash()?),
        ("todo.txt", file2.hash()?),
    ]);
    let tree = Object::tree([("sub-tree", sub_tree.hash()?)]);

    for object in [&file1, &file2, &sub_tree, &tree] {
        s1.put(object.hash()?.as_str(), &object.content()?).await?;
    }
    let root = tree.hash()?;
    println!("source {} populated, root {}", "s1".bold(), root.short().yellow());

    sync(Arc::clone(&s1), root.clone(), Arc::clone(&s2), None).await?;
    println!("{} synced {} into {}", "✓".green().bold(), root.short().yellow(), "s2".bold());

    if !args.no_fsck {
        fsck(s1, root.clone()).await?;
        fsck(s2, root.clone()).await?;
        println!("{} fsck clean on both stores", "✓".green().bold());
    }
    Ok(())
}

fn cmd_hash(args: HashArgs) -> anyhow::Result<()> {
    let payload = match args.payload {
        Some(payload) => payload,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let leaf = Object::leaf(payload);
    println!("{}", leaf.hash()?);
    Ok(())
}
