/// Strip directory components and unsafe characters from a client-supplied
/// filename so it is safe to embed in a storage key. Whitespace becomes `_`,
/// anything outside `[A-Za-z0-9._-]` is dropped, and leading/trailing dots are
/// removed so the result can never be `.` or `..`.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    cleaned.trim_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_plain_names() {
        assert_eq!(sanitize_filename("vendas.csv"), "vendas.csv");
        assert_eq!(sanitize_filename("relatorio-2024_01.csv"), "relatorio-2024_01.csv");
    }

    #[test]
    fn strips_directory_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("/tmp/dados.csv"), "dados.csv");
        assert_eq!(sanitize_filename("C:\\Users\\x\\dados.csv"), "dados.csv");
    }

    #[test]
    fn replaces_whitespace_and_drops_unsafe_characters() {
        assert_eq!(sanitize_filename("planilha de vendas.csv"), "planilha_de_vendas.csv");
        assert_eq!(sanitize_filename("dados(1)?.csv"), "dados1.csv");
    }

    #[test]
    fn never_yields_dot_or_dot_dot() {
        assert_eq!(sanitize_filename(".."), "");
        assert_eq!(sanitize_filename("..."), "");
        assert_eq!(sanitize_filename(".hidden"), "hidden");
    }
}
