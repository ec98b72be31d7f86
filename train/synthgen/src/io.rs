use std::{
    fs::{self, File},
    io::{BufWriter, Error, Write},
};

use shapes::ShapeKind;

use crate::{
    generator::{DatasetGenerator, GenerateError, Sample},
    palette::ColorScheme,
    record::JsonRecord,
};

impl DatasetGenerator<'_> {
    pub fn init_output(&mut self) -> std::io::Result<()> {
        fs::create_dir_all(&self.images_dir)?;
        if self.writer.is_none() {
            let path = self.images_dir.join("labels.jsonl");
            let file = File::create(path)?;
            self.writer = Some(BufWriter::with_capacity(1 << 20, file));
        }
        Ok(())
    }

    /// Class list consumed by the trainer, one shape name per line in class
    /// index order.
    pub fn write_class_names(&self) -> Result<(), Error> {
        let path = self.config.names_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut out = BufWriter::new(File::create(&path)?);
        for kind in ShapeKind::ALL {
            writeln!(out, "{}", kind.name())?;
        }
        out.flush()?;
        log::debug!("wrote class list {}", path.display());
        Ok(())
    }

    /// Writes `<shape>_<color>_<index>.jpg` and its `.txt` label into the
    /// canvas color directory, then appends the manifest record.
    pub fn save_sample(
        &mut self,
        sample: &Sample,
        scheme: &ColorScheme,
        index: u32,
    ) -> Result<(), GenerateError> {
        let dir = self.images_dir.join(&scheme.canvas.name);
        fs::create_dir_all(&dir)?;

        let stem = format!("{}_{}_{}", sample.kind.name(), scheme.shape.name, index);
        let image_name = format!("{stem}.jpg");
        let label_name = format!("{stem}.txt");

        sample.canvas.save(dir.join(&image_name))?;
        fs::write(dir.join(&label_name), sample.annotation.to_string())?;
        log::debug!("saved {stem} to {}", dir.display());

        let rec = JsonRecord {
            schema: "v1",
            image: format!("{}/{image_name}", scheme.canvas.name),
            label: format!("{}/{label_name}", scheme.canvas.name),
            shape: sample.kind,
            class: sample.kind.class_index(),
            bbox: sample.bbox,
            canvas_color: &scheme.canvas.name,
            shape_color: &scheme.shape.name,
            seed: sample.seed,
        };
        let json = serde_json::to_string(&rec)?;

        if let Some(ref mut writer) = self.writer {
            writeln!(writer, "{}", json)?;
        }

        Ok(())
    }

    pub fn finalize_output(&mut self) -> Result<(), Error> {
        if let Some(writer) = self.writer.take() {
            writer.into_inner()?.sync_all()?;
        }
        Ok(())
    }
}
