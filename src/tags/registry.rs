use std::collections::{BTreeSet, HashMap};

/// A family of files sharing the same descriptive tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileKind {
    pub name: String,
    pub extensions: Vec<String>,
    pub filenames: Vec<String>,
    pub interpreters: Vec<String>,
    pub tags: BTreeSet<String>,
}

impl FileKind {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>, tags: Vec<&str>) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            filenames: Vec::new(),
            interpreters: Vec::new(),
            tags: tags.into_iter().map(String::from).collect(),
        }
    }

    /// Exact file names (e.g. `Makefile`) belonging to this kind.
    #[must_use]
    pub fn with_filenames(mut self, filenames: Vec<&str>) -> Self {
        self.filenames = filenames.into_iter().map(String::from).collect();
        self
    }

    /// Shebang interpreters (e.g. `python3`) belonging to this kind.
    #[must_use]
    pub fn with_interpreters(mut self, interpreters: Vec<&str>) -> Self {
        self.interpreters = interpreters.into_iter().map(String::from).collect();
        self
    }
}

/// Lookup tables from file name, extension and interpreter to tags.
///
/// Later registrations win when two kinds claim the same key.
#[derive(Debug)]
pub struct TagRegistry {
    kinds: Vec<FileKind>,
    extension_map: HashMap<String, usize>,
    filename_map: HashMap<String, usize>,
    interpreter_map: HashMap<String, usize>,
}

impl TagRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            kinds: Vec::new(),
            extension_map: HashMap::new(),
            filename_map: HashMap::new(),
            interpreter_map: HashMap::new(),
        }
    }

    pub fn register(&mut self, kind: FileKind) {
        let idx = self.kinds.len();
        for ext in &kind.extensions {
            self.extension_map.insert(ext.to_ascii_lowercase(), idx);
        }
        for name in &kind.filenames {
            self.filename_map.insert(name.clone(), idx);
        }
        for interpreter in &kind.interpreters {
            self.interpreter_map.insert(interpreter.clone(), idx);
        }
        self.kinds.push(kind);
    }

    /// Extension lookup is case-insensitive and takes the extension without
    /// its leading dot.
    #[must_use]
    pub fn tags_for_extension(&self, ext: &str) -> Option<&BTreeSet<String>> {
        self.extension_map
            .get(&ext.to_ascii_lowercase())
            .map(|&idx| &self.kinds[idx].tags)
    }

    #[must_use]
    pub fn tags_for_filename(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.filename_map
            .get(name)
            .map(|&idx| &self.kinds[idx].tags)
    }

    /// Look up an interpreter, dropping trailing `.N` version parts until a
    /// registered name matches (`python3.11` falls back to `python3`).
    #[must_use]
    pub fn tags_for_interpreter(&self, interpreter: &str) -> Option<&BTreeSet<String>> {
        let mut candidate = interpreter;
        while !candidate.is_empty() {
            if let Some(&idx) = self.interpreter_map.get(candidate) {
                return Some(&self.kinds[idx].tags);
            }
            candidate = match candidate.rsplit_once('.') {
                Some((head, _)) => head,
                None => return None,
            };
        }
        None
    }

    #[must_use]
    pub fn all(&self) -> &[FileKind] {
        &self.kinds
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        registry.register(
            FileKind::new("Python", vec!["py", "pyw"], vec!["python", "text"])
                .with_interpreters(vec!["python", "python2", "python3", "pypy", "pypy3"]),
        );
        registry.register(FileKind::new(
            "Python stub",
            vec!["pyi"],
            vec!["python", "pyi", "text"],
        ));
        registry.register(FileKind::new(
            "Cython",
            vec!["pyx", "pxd"],
            vec!["cython", "text"],
        ));
        registry.register(FileKind::new("Rust", vec!["rs"], vec!["rust", "text"]));
        registry.register(FileKind::new("Go", vec!["go"], vec!["go", "text"]));
        registry.register(FileKind::new("C", vec!["c"], vec!["c", "text"]));
        registry.register(FileKind::new(
            "C header",
            vec!["h"],
            vec!["c", "header", "text"],
        ));
        registry.register(FileKind::new(
            "C++",
            vec!["cpp", "cc", "cxx"],
            vec!["c++", "text"],
        ));
        registry.register(FileKind::new(
            "C++ header",
            vec!["hpp", "hh", "hxx"],
            vec!["c++", "header", "text"],
        ));
        registry.register(
            FileKind::new(
                "JavaScript",
                vec!["js", "mjs", "cjs"],
                vec!["javascript", "text"],
            )
            .with_interpreters(vec!["node", "nodejs"]),
        );
        registry.register(FileKind::new("TypeScript", vec!["ts"], vec!["ts", "text"]));
        registry.register(FileKind::new("TSX", vec!["tsx"], vec!["tsx", "text"]));
        registry.register(FileKind::new("JSX", vec!["jsx"], vec!["jsx", "text"]));
        registry.register(FileKind::new("Java", vec!["java"], vec!["java", "text"]));
        registry.register(
            FileKind::new("Ruby", vec!["rb"], vec!["ruby", "text"])
                .with_filenames(vec!["Gemfile", "Rakefile"])
                .with_interpreters(vec!["ruby"]),
        );
        registry.register(
            FileKind::new("Shell", vec!["sh"], vec!["shell", "sh", "text"])
                .with_interpreters(vec!["sh", "dash"]),
        );
        registry.register(
            FileKind::new("Bash", vec!["bash"], vec!["shell", "bash", "text"])
                .with_interpreters(vec!["bash"]),
        );
        registry.register(
            FileKind::new("Zsh", vec!["zsh"], vec!["shell", "zsh", "text"])
                .with_interpreters(vec!["zsh"]),
        );
        registry.register(
            FileKind::new("Perl", vec!["pl", "pm"], vec!["perl", "text"])
                .with_interpreters(vec!["perl"]),
        );
        registry.register(
            FileKind::new("Lua", vec!["lua"], vec!["lua", "text"]).with_interpreters(vec!["lua"]),
        );
        registry.register(
            FileKind::new("TOML", vec!["toml"], vec!["toml", "text"])
                .with_filenames(vec!["Cargo.lock", "Pipfile"]),
        );
        registry.register(FileKind::new(
            "YAML",
            vec!["yaml", "yml"],
            vec!["yaml", "text"],
        ));
        registry.register(FileKind::new("JSON", vec!["json"], vec!["json", "text"]));
        registry.register(FileKind::new(
            "Markdown",
            vec!["md", "markdown"],
            vec!["markdown", "text"],
        ));
        registry.register(
            FileKind::new("Plain text", vec!["txt"], vec!["plain-text", "text"])
                .with_filenames(vec!["README", "LICENSE", "AUTHORS"]),
        );
        registry.register(FileKind::new("INI", vec!["ini", "cfg"], vec!["ini", "text"]));
        registry.register(
            FileKind::new("Makefile", vec!["mk"], vec!["makefile", "text"])
                .with_filenames(vec!["Makefile", "makefile", "GNUmakefile"]),
        );
        registry.register(
            FileKind::new("Dockerfile", vec![], vec!["dockerfile", "text"])
                .with_filenames(vec!["Dockerfile"]),
        );
        registry.register(FileKind::new("HTML", vec!["html", "htm"], vec!["html", "text"]));
        registry.register(FileKind::new("CSS", vec!["css"], vec!["css", "text"]));
        registry.register(FileKind::new("SQL", vec!["sql"], vec!["sql", "text"]));
        registry.register(FileKind::new("XML", vec!["xml"], vec!["xml", "text"]));
        registry.register(FileKind::new(
            "PNG",
            vec!["png"],
            vec!["image", "png", "binary"],
        ));
        registry.register(FileKind::new(
            "JPEG",
            vec!["jpg", "jpeg"],
            vec!["image", "jpeg", "binary"],
        ));
        registry.register(FileKind::new(
            "GIF",
            vec!["gif"],
            vec!["image", "gif", "binary"],
        ));
        registry.register(FileKind::new("Zip", vec!["zip"], vec!["zip", "binary"]));
        registry.register(FileKind::new("PDF", vec!["pdf"], vec!["pdf", "binary"]));

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
