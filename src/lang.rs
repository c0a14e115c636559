/// Extension of the final path component: the substring after its last `.`,
/// or `""` when there is no dot or nothing follows it. Paths come from git
/// output, so `/` is the only separator.
pub fn extension_of(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => "",
    }
}

/// Map a file extension to a language label.
///
/// Lookup is case-sensitive against the fixed table; extensions not in the
/// table pass through unchanged as a best-effort label. Callers exclude empty
/// extensions before classification.
pub fn classify(extension: &str) -> &str {
    match extension {
        "kt" => "Kotlin",
        "kts" => "Kotlin Script",
        "java" => "Java",
        "py" => "Python",
        "js" | "jsx" => "JavaScript",
        "ts" | "tsx" => "TypeScript",
        "rb" => "Ruby",
        "cpp" | "hpp" => "C++",
        "c" | "h" => "C",
        "cs" => "C#",
        "php" => "PHP",
        "swift" => "Swift",
        "go" => "Go",
        "rs" => "Rust",
        "html" => "HTML",
        "css" => "CSS",
        "scss" | "sass" => "Sass",
        "md" => "Markdown",
        "pl" | "pm" => "Perl",
        "sh" | "bash" => "Shell",
        "sql" => "SQL",
        "ps1" => "PowerShell",
        "lua" => "Lua",
        "elm" => "Elm",
        "ex" | "exs" => "Elixir",
        "erl" | "hrl" => "Erlang",
        "r" => "R",
        "f" | "f90" | "f95" => "Fortran",
        "jl" => "Julia",
        "groovy" => "Groovy",
        "gd" => "Godot (GDScript)",
        "nim" => "Nim",
        "hs" | "lhs" => "Haskell",
        "ml" | "mli" => "OCaml",
        "scala" | "sc" => "Scala",
        "vb" => "Visual Basic",
        "vbs" => "VBScript",
        "dart" => "Dart",
        "clj" => "Clojure",
        "cljs" => "ClojureScript",
        "cljc" => "Clojure/ClojureScript",
        "coffee" => "CoffeeScript",
        "yml" | "yaml" => "YAML",
        "json" => "JSON",
        "xml" => "XML",
        _ => extension,
    }
}
