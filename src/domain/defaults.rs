pub const DEFAULT_INCLUDES: &[&str] = &["**/*.py", "**/pyproject.toml"];

pub const DEFAULT_EXCLUDES: &[&str] = &[
    // Version control
    ".git/**",
    // Caches and compiled Python
    "__pycache__/**",
    "*.pyc",
    "*.pyo",
    "*.pyd",
    ".pytest_cache/**",
    ".mypy_cache/**",
    ".ruff_cache/**",
    ".tox/**",
    ".coverage",
    "htmlcov/**",
    // Virtual environments
    ".venv/**",
    "venv/**",
    ".env/**",
    "env/**",
    "node_modules/**",
    // Build artifacts
    "*.egg-info/**",
    "dist/**",
    "build/**",
    // OS metadata
    ".DS_Store",
    "Thumbs.db",
    "*.log",
    // Native libraries
    "*.so",
    "*.dylib",
    "*.dll",
];

pub const DEFAULT_OUTPUT: &str = "combined";

pub const OUTPUT_EXTENSION: &str = "txt";

pub fn to_owned_patterns(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|s| s.to_string()).collect()
}
