use serde_json::Value;

use crate::error::{SearchError, SearchResult};
use crate::models::domain::MatchedPerson;

/// Result of `detectFaces`
#[derive(Debug, Clone)]
pub struct DetectFacesResult {
    /// Normalized image reference, passed back to `searchFace` untouched
    pub image: Value,
    /// Detected face descriptors in upstream order
    pub faces: Vec<Value>,
}

impl DetectFacesResult {
    pub fn from_result(result: Value) -> SearchResult<Self> {
        let Value::Object(mut obj) = result else {
            return Err(SearchError::invalid_response("detectFaces result is not an object"));
        };

        let image = obj
            .remove("image")
            .ok_or_else(|| SearchError::invalid_response("Missing image in detectFaces result"))?;

        let faces = match obj.remove("faces") {
            Some(Value::Array(faces)) => faces,
            _ => return Err(SearchError::invalid_response("Missing faces array in detectFaces result")),
        };

        Ok(Self { image, faces })
    }

    /// First detected face, which is the one the search runs against
    pub fn first_face(&self) -> SearchResult<&Value> {
        self.faces.first().ok_or(SearchError::NoFaceDetected)
    }
}

/// Result of `searchFace`
#[derive(Debug, Clone)]
pub struct SearchFaceResult {
    pub profiles: Vec<MatchedPerson>,
}

impl SearchFaceResult {
    pub fn from_result(result: Value) -> SearchResult<Self> {
        let profiles = match result {
            Value::Object(mut obj) => obj.remove("profiles"),
            _ => None,
        };

        let Some(Value::Array(profiles)) = profiles else {
            return Err(SearchError::invalid_response("Missing profiles array in searchFace result"));
        };

        Ok(Self {
            profiles: parse_profiles(profiles)?,
        })
    }
}

/// Map raw profile objects to `MatchedPerson`, preserving upstream order
pub fn parse_profiles(profiles: Vec<Value>) -> SearchResult<Vec<MatchedPerson>> {
    profiles
        .into_iter()
        .enumerate()
        .map(|(index, profile)| {
            serde_json::from_value(profile)
                .map_err(|source| SearchError::InvalidProfile { index, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(name: &str) -> Value {
        json!({
            "profile": format!("https://vk.com/{}", name),
            "photo": format!("https://img/{}.jpg", name),
            "source": "vk_wall",
            "age": 30,
            "first_name": name,
            "last_name": "B",
            "city": "C",
            "country": "D"
        })
    }

    #[test]
    fn test_detect_result_keeps_opaque_values() {
        let result = DetectFacesResult::from_result(json!({
            "image": "norm-123",
            "faces": [[10, 20, 30, 40, 0], [1, 2, 3, 4, 0]]
        }))
        .unwrap();

        assert_eq!(result.image, json!("norm-123"));
        assert_eq!(result.faces.len(), 2);
        assert_eq!(result.first_face().unwrap(), &json!([10, 20, 30, 40, 0]));
    }

    #[test]
    fn test_empty_faces_is_no_face_detected() {
        let result = DetectFacesResult::from_result(json!({"image": "x", "faces": []})).unwrap();
        assert!(matches!(result.first_face(), Err(SearchError::NoFaceDetected)));
    }

    #[test]
    fn test_detect_result_missing_fields() {
        assert!(matches!(
            DetectFacesResult::from_result(json!({"faces": []})),
            Err(SearchError::InvalidResponse(_))
        ));
        assert!(matches!(
            DetectFacesResult::from_result(json!({"image": "x"})),
            Err(SearchError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_profiles_keep_upstream_order() {
        let result = SearchFaceResult::from_result(json!({
            "profiles": [profile("zed"), profile("amy"), profile("bob")]
        }))
        .unwrap();

        let names: Vec<&str> = result.profiles.iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(names, vec!["zed", "amy", "bob"]);
    }

    #[test]
    fn test_bad_profile_reports_index() {
        let mut broken = profile("bad");
        broken.as_object_mut().unwrap().remove("country");

        let err = SearchFaceResult::from_result(json!({"profiles": [profile("ok"), broken]}))
            .unwrap_err();

        assert!(matches!(err, SearchError::InvalidProfile { index: 1, .. }));
    }

    #[test]
    fn test_empty_profiles_is_ok() {
        let result = SearchFaceResult::from_result(json!({"profiles": []})).unwrap();
        assert!(result.profiles.is_empty());
    }
}
