/// Implements [schemars::JsonSchema] by delegating to a parameters struct
macro_rules! json_schema {
    ($parameters: ty, $inline: literal) => {
        fn inline_schema() -> bool {
            $inline
        }

        fn schema_name() -> std::borrow::Cow<'static, str> {
            <$parameters as schemars::JsonSchema>::schema_name()
        }

        fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
            <$parameters as schemars::JsonSchema>::json_schema(generator)
        }
    };
}
