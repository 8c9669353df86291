macro_rules! read_compressed {
    ($file: ident, $function: expr $(, $param: expr )* ) => {{
        let reader = File::open($file).map_err(|source| Error::Io { path: $file.to_path_buf(), source })?;
        let reader = BufReader::new(reader);

        match $file.extension().and_then(OsStr::to_str) {
            Some("gz") => {
                let reader = BufReader::new(GzDecoder::new(reader));
                $function(reader $(, $param)*)
            }
            Some(_) | None => $function(reader $(, $param)*),
        }
    }};
}

pub(crate) use read_compressed;
