mod tests_parse_tree;
mod tests_scopes;
