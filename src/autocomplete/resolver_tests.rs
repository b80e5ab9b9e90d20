#![cfg(test)]
use crate::*;
use rstest::rstest;

/// Strip the `!` cursor marker from `input`, returning the text and the marker's row and column.
fn marked(input: &str) -> (String, usize, usize) {
    let (row, col) = input
        .split('\n')
        .enumerate()
        .find_map(|(row, line)| line.find('!').map(|col| (row, col)))
        .expect("test input needs a `!` cursor marker");
    (input.replacen('!', "", 1), row, col)
}

fn namespace(input: &str) -> Option<String> {
    let (text, row, col) = marked(input);
    namespace_for_autocomplete(&text, row, col).expect("statement should parse")
}

mod qualified {
    use super::*;

    #[rstest]
    // One table, one alias
    #[case(
        "
        select s.!
        from student s
        ",
        "student"
    )]
    // One fully qualified table
    #[case(
        "
        select s.!
        from school.student s
        ",
        "school.student"
    )]
    // Database
    #[case(
        "
        select
        from school.stu!
        ",
        "school"
    )]
    // Subquery, no possible alias confusion
    #[case(
        "
        select
        from student
        where student_id in (
            select c.!
            from classroom c
        ",
        "classroom"
    )]
    // Subquery referencing an outer alias
    #[case(
        "
        select
        from student s
        where s.student_id in (
            select c.student_id
            from classroom c
            where s.!
        ",
        "student"
    )]
    // Subquery rebinding the outer alias
    #[case(
        "
        select
        from student s
        where s.student_id in (
            select s.student_id
            from soccer_team s
            where s.!
        ",
        "soccer_team"
    )]
    // Two subqueries, cursor in the second
    #[case(
        "
        select
        from student s
        where s.student_id in (
            select s.student_id
            from soccer_team s
            where s.position = 'GK'
        )
        and s.subject_id in (
            select s.!
            from subject s
        ",
        "subject"
    )]
    // Two subqueries, cursor in the outer SELECT
    #[case(
        "
        select s.!
        from student s
        where s.student_id in (
            select s.student_id
            from soccer_team s
            where s.position = 'GK'
        )
        and s.subject_id in (
            select s.subject_id
            from subject s
        ",
        "student"
    )]
    // Subquery with UNION
    #[case(
        "
        select s.first_name
        from student s
        where s.student_id in (
            select s.student_id
            from science_class s
            where s.desk_number < 10
            union
            select s.!
            from statistics_class s
        ",
        "statistics_class"
    )]
    // Triple UNION, cursor in the middle arm
    #[case(
        "
        select s.student_id
        from soccer_team s
        union
        select s.student_id
        from science_class s
        where s.!
        union
        select s.student_id
        from statistics_class s
        ",
        "science_class"
    )]
    // Subquery as a derived table
    #[case(
        "
        select s.first_name
        from student s
        join (
            select s.!
            from soccer_team s
        ) x
        on s.student_id = x.student_id
        ",
        "soccer_team"
    )]
    fn should_resolve_namespace(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(namespace(input).as_deref(), Some(expected));
    }

    #[test]
    fn alias_after_cursor() {
        assert_eq!(namespace("select s.!\nfrom student s").as_deref(), Some("student"));
        assert_eq!(
            namespace("select s.!\nfrom school.student s").as_deref(),
            Some("school.student")
        );
    }

    #[test]
    fn database_prefix_at_end_of_word() {
        assert_eq!(namespace("select\nfrom school.stu!").as_deref(), Some("school"));
    }

    #[test]
    fn union_arm_does_not_see_sibling_binding() {
        let input = "select s.id from soccer_team s\nunion\nselect s.! from science_class s";
        assert_eq!(namespace(input).as_deref(), Some("science_class"));

        let input = "select s.! from soccer_team s\nunion\nselect s.id from science_class s";
        assert_eq!(namespace(input).as_deref(), Some("soccer_team"));
    }

    #[test]
    fn unbound_qualifier_is_taken_literally() {
        assert_eq!(
            namespace("select student.! from student").as_deref(),
            Some("student")
        );
        assert_eq!(
            namespace("select library.book.! from x").as_deref(),
            Some("library.book")
        );
    }

    #[test]
    fn as_alias_binds() {
        assert_eq!(
            namespace("select t.! from `school`.`student` as t").as_deref(),
            Some("school.student")
        );
    }

    #[test]
    fn derived_table_alias_is_not_bound() {
        assert_eq!(
            namespace("select x.! from (select 1) x").as_deref(),
            Some("x")
        );
    }

    #[rstest]
    #[case("with w as (select 1 from t s) select s.! from u s", "u")]
    #[case("select 'é', s.! from student s", "student")]
    #[case("select `s`.! from student `s`", "student")]
    #[case("insert into log select s.! from student s", "student")]
    fn resolves_around_other_statement_shapes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(namespace(input).as_deref(), Some(expected));
    }

    #[test]
    fn cursor_inside_function_arguments() {
        assert_eq!(
            namespace("select count(s.!) from student s").as_deref(),
            Some("student")
        );
    }
}

mod unqualified {
    use super::*;

    #[rstest]
    #[case("select na! from student", "student")]
    #[case("select !\nfrom school.student s", "school.student")]
    #[case("update abc set de! = 1", "abc")]
    #[case("select a from b where !", "b")]
    fn should_fall_back_to_first_table(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(namespace(input).as_deref(), Some(expected));
    }

    #[test]
    fn nothing_to_resolve() {
        assert_eq!(namespace("select 1 + !"), None);
        let (text, row, col) = marked("select na!");
        assert_eq!(resolve_namespace(&text, row, col).unwrap(), None);
    }
}

mod failures {
    use super::*;

    #[test]
    fn unbalanced_parenthesis_is_a_parse_failure() {
        let (text, row, col) = marked("select s.!\nfrom student s)");
        assert!(matches!(
            namespace_for_autocomplete(&text, row, col),
            Err(ParseError::UnbalancedParen { .. })
        ));
    }

    #[test]
    fn unterminated_string_is_a_parse_failure() {
        let (text, row, col) = marked("select s.! from student s where name = 'abc");
        assert!(matches!(
            namespace_for_autocomplete(&text, row, col),
            Err(ParseError::Tokenize(_))
        ));
    }

    #[test]
    fn cursor_row_outside_statement() {
        assert_eq!(resolve_namespace("select 1", 4, 0).unwrap(), None);
    }
}
