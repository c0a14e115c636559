use std::collections::BTreeSet;

/// Marker token → framework/tool name. A marker matches when its token appears
/// anywhere in a path (case-sensitive containment), so a path may hit several
/// markers and unrelated names containing a token also match.
const FRAMEWORK_MARKERS: &[(&str, &str)] = &[
    ("build.gradle.kts", "Gradle"),
    ("build.gradle", "Gradle"),
    ("pom.xml", "Maven"),
    ("package.json", "Node.js"),
    ("Gemfile", "Ruby on Rails"),
    ("composer.json", "PHP"),
    ("pubspec.yaml", "Dart"),
    ("mix.exs", "Elixir"),
    ("Makefile", "Make"),
    ("build.sbt", "Scala (SBT)"),
    ("CMakeLists.txt", "CMake"),
    ("build.xml", "Ant"),
    ("webpack.config.js", "Webpack"),
    ("angular.json", "Angular"),
    ("vue.config.js", "Vue.js"),
    ("next.config.js", "Next.js"),
    ("nuxt.config.js", "Nuxt.js"),
    ("gatsby-config.js", "Gatsby"),
    ("server.js", "Express.js"),
    ("app.js", "Express.js"),
    ("spring-boot-starter", "Spring Boot"),
    ("application.yml", "Spring Framework"),
    ("application.properties", "Spring Framework"),
    ("config.ru", "Rack"),
    ("Rakefile", "Rake"),
    ("Jenkinsfile", "Jenkins"),
    ("Dockerfile", "Docker"),
    ("Vagrantfile", "Vagrant"),
    ("terraform", "Terraform"),
    ("ansible", "Ansible"),
    ("kubernetes", "Kubernetes"),
    ("helm", "Helm"),
    ("react", "React"),
    ("redux", "Redux"),
    ("vue", "Vue.js"),
    ("svelte", "Svelte"),
    ("ember", "Ember.js"),
    ("backbone", "Backbone.js"),
    ("jquery", "jQuery"),
    ("bootstrap", "Bootstrap"),
    ("tailwind", "Tailwind CSS"),
    ("foundation", "Foundation"),
    ("bulma", "Bulma"),
];

/// Collect every framework whose marker token occurs in any of the paths.
pub fn detect_frameworks(paths: &[String]) -> BTreeSet<String> {
    let mut frameworks = BTreeSet::new();
    for path in paths {
        for (token, framework) in FRAMEWORK_MARKERS {
            if path.contains(token) {
                frameworks.insert((*framework).to_string());
            }
        }
    }
    frameworks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn detects_markers_across_paths() {
        let found = detect_frameworks(&paths(&["project/package.json", "src/app.js"]));
        assert!(found.contains("Node.js"));
        assert!(found.contains("Express.js"));
    }

    #[test]
    fn one_path_can_match_several_markers() {
        let found = detect_frameworks(&paths(&["react/package.json"]));
        assert!(found.contains("React"));
        assert!(found.contains("Node.js"));
    }

    #[test]
    fn duplicates_collapse_into_a_set() {
        let found = detect_frameworks(&paths(&["a/package.json", "b/package.json"]));
        assert_eq!(found.iter().filter(|f| *f == "Node.js").count(), 1);
    }

    #[test]
    fn containment_matches_inside_unrelated_names() {
        // "reaction" contains "react"; loose matching keeps it.
        let found = detect_frameworks(&paths(&["src/reaction/chain.js"]));
        assert!(found.contains("React"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(detect_frameworks(&paths(&["dockerfile"])).is_empty());
        assert!(detect_frameworks(&paths(&["sub/Dockerfile"])).contains("Docker"));
    }

    #[test]
    fn extensionless_build_files_are_detected() {
        let found = detect_frameworks(&paths(&["Makefile", "ci/Jenkinsfile"]));
        assert!(found.contains("Make"));
        assert!(found.contains("Jenkins"));
    }

    #[test]
    fn no_paths_no_frameworks() {
        assert!(detect_frameworks(&[]).is_empty());
    }
}
