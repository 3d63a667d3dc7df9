use anyhow::{Context, Result};
use flora_core::AppConfig;
use std::path::Path;
use walkdir::WalkDir;

/// One image under `train/<class>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Descriptor {
    pub scientific_name: String,
    /// Path as served under `/dataset`, e.g. `dataset/train/Aloe vera/1.jpg`.
    pub image_path: String,
}

/// Collect every file exactly two levels below `<root>/train`, sorted by path.
pub(crate) fn collect_descriptors(root: &Path) -> Result<Vec<Descriptor>> {
    let train = root.join("train");
    let mut out = Vec::new();
    for entry in WalkDir::new(&train).min_depth(2).max_depth(2).sort_by_file_name() {
        let entry = entry.with_context(|| format!("reading {}", train.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(class) = entry.path().parent().and_then(Path::file_name) else {
            continue;
        };
        let class = class.to_string_lossy().into_owned();
        let file = entry.file_name().to_string_lossy().into_owned();
        out.push(Descriptor {
            image_path: format!("dataset/train/{class}/{file}"),
            scientific_name: class,
        });
    }
    Ok(out)
}

pub(crate) async fn run(config: &AppConfig, root: &Path) -> Result<()> {
    let descriptors = collect_descriptors(root)?;
    tracing::info!(root = %root.display(), images = descriptors.len(), "seeding dataset");

    let storage = super::connect(config).await?;
    let mut inserted = 0_usize;
    let mut skipped = 0_usize;
    for d in &descriptors {
        if storage.insert_dataset_descriptor(&d.scientific_name, &d.image_path).await? {
            inserted += 1;
            tracing::debug!(path = %d.image_path, "descriptor inserted");
        } else {
            skipped += 1;
        }
    }
    tracing::info!(inserted, skipped, "seeding finished");
    println!("inserted {inserted}, already present {skipped}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_class_images_only() {
        let dir = tempfile::tempdir().unwrap();
        let train = dir.path().join("train");
        std::fs::create_dir_all(train.join("Aloe vera")).unwrap();
        std::fs::create_dir_all(train.join("Curcuma longa").join("nested")).unwrap();
        std::fs::write(train.join("Aloe vera").join("2.jpg"), b"x").unwrap();
        std::fs::write(train.join("Aloe vera").join("1.jpg"), b"x").unwrap();
        std::fs::write(train.join("Curcuma longa").join("a.png"), b"x").unwrap();
        std::fs::write(train.join("Curcuma longa").join("nested").join("deep.jpg"), b"x").unwrap();
        std::fs::write(train.join("README.txt"), b"x").unwrap();

        let found = collect_descriptors(dir.path()).unwrap();
        let paths: Vec<&str> = found.iter().map(|d| d.image_path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "dataset/train/Aloe vera/1.jpg",
                "dataset/train/Aloe vera/2.jpg",
                "dataset/train/Curcuma longa/a.png",
            ]
        );
        assert_eq!(found[2].scientific_name, "Curcuma longa");
    }

    #[test]
    fn missing_train_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_descriptors(dir.path()).is_err());
    }
}
