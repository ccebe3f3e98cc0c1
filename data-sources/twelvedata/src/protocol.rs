use serde::Deserialize;

/// The provider answers HTTP 200 for rejected requests too; the error is
/// only visible in the body shape.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Response<T> {
    Success(T),
    Error {
        code: i64,
        message: String,
        status: String,
    },
}

#[cfg(test)]
mod test {

    use crate::time_series::TimeSeries;

    use super::Response;

    #[test]
    fn rejected_body() {
        let raw_msg = r#"{
            "code": 401,
            "message": "**apikey** parameter is incorrect or not specified",
            "status": "error"
        }"#;

        let resp = serde_json::from_str::<Response<TimeSeries>>(raw_msg).unwrap();
        let Response::Error { code, status, .. } = resp else {
            panic!("nope");
        };

        assert_eq!(code, 401);
        assert_eq!(status, "error");
    }
}
